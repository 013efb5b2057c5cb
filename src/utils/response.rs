use std::collections::HashMap;

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use validator::ValidationErrors;

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &str, data: T) -> Self {
        ApiResponse {
            status: true,
            message: message.to_string(),
            data: Some(data),
        }
    }

    pub fn error(message: &str) -> Self {
        ApiResponse {
            status: false,
            message: message.to_string(),
            data: None,
        }
    }
}

/// Collects validator field errors into a `{field: [messages]}` map and wraps
/// them in a 422 response. Every JSON handler funnels payload validation
/// through this instead of repeating the collection loop.
pub fn validation_failure(errors: ValidationErrors) -> (StatusCode, Json<ApiResponse<Value>>) {
    let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();

    for (field, errors) in errors.field_errors() {
        let message = errors
            .iter()
            .filter_map(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .collect::<Vec<String>>();

        field_errors.insert(field.to_string(), message);
    }

    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ApiResponse {
            status: false,
            message: "Validation failed".to_string(),
            data: Some(json!(field_errors)),
        }),
    )
}
