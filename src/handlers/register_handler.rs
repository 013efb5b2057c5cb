use crate::schemas::auth_schema::{RegisterRequest, RegisterResponse};
use crate::utils::response::{ApiResponse, validation_failure};
use crate::utils::{otp, password};
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::sync::Arc;
use validator::Validate;

use crate::config::settings::AppConfig;

pub async fn register(
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<RegisterRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    // Strength rules beyond plain length are authoritative here
    let strength = password::strength_errors(&payload.password);
    if !strength.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse {
                status: false,
                message: "Validation failed".to_string(),
                data: Some(json!({ "password": strength })),
            }),
        );
    }

    let hashed = match password::hash_password(&payload.password) {
        Ok(hashed) => hashed,
        Err(response) => return (StatusCode::INTERNAL_SERVER_ERROR, response),
    };

    // Check if email already exists
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(&db)
        .await;

    match existing {
        Ok(Some(_)) => {
            return (
                StatusCode::CONFLICT,
                Json(ApiResponse::error("Email already exists. Please login.")),
            );
        }
        Ok(None) => {}
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to check email")),
            );
        }
    }

    let result = sqlx::query(
        "INSERT INTO users (name, email, password, role, is_verified) VALUES (?, ?, ?, 'resident', 0)",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&hashed)
    .execute(&db)
    .await;

    let user_id = match result {
        Ok(result) => result.last_insert_id() as i64,
        Err(e) => {
            if e.to_string().contains("Duplicate entry") {
                return (
                    StatusCode::CONFLICT,
                    Json(ApiResponse::error("Email already exists. Please login.")),
                );
            }
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to register user")),
            );
        }
    };

    // Issue the account-verification code; delivery is handled by the
    // external mailer, here it only gets logged.
    let code = otp::generate_code();
    let expires_at = otp::expiry_from_now(config.otp_expiry_minutes);

    let stored = sqlx::query(
        "INSERT INTO verification_codes (email, code, purpose, verified, expires_at) \
         VALUES (?, ?, 'account', 0, ?)",
    )
    .bind(&payload.email)
    .bind(&code)
    .bind(expires_at)
    .execute(&db)
    .await;

    if let Err(e) = stored {
        eprintln!("Failed to store verification code: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to issue verification code")),
        );
    }

    println!("Verification code for {}: {}", payload.email, code);

    let user = sqlx::query_as::<_, (i64, String, String, Option<chrono::DateTime<chrono::Utc>>)>(
        "SELECT id, name, email, created_at FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_one(&db)
    .await;

    match user {
        Ok((id, name, email, created_at)) => {
            let response = RegisterResponse {
                id,
                name,
                email,
                created_at,
            };

            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    "Account created successfully! Check your email for the verification code.",
                    json!(response),
                )),
            )
        }
        Err(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to get user data")),
        ),
    }
}
