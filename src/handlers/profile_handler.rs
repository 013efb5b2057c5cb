use axum::extract::{Multipart, Path};
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::sync::Arc;
use validator::Validate;

use crate::config::settings::AppConfig;
use crate::handlers::upload_handler::save_bytes;
use crate::schemas::profile_schema::{ProfileResponse, ProfileUpdateRequest};
use crate::utils::response::{ApiResponse, validation_failure};

type ProfileRow = (String, String, Option<String>, Option<String>, Option<String>);

/// GET /api/profile/{id}
pub async fn show(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let row = sqlx::query_as::<_, ProfileRow>(
        "SELECT name, email, contact, address, profile_picture_url FROM users WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&db)
    .await;

    match row {
        Ok(Some((name, email, contact, address, profile_picture_url))) => {
            let profile = ProfileResponse {
                name,
                email,
                contact,
                address,
                profile_picture_url,
            };

            (
                StatusCode::OK,
                Json(ApiResponse::success("Profile", json!(profile))),
            )
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error("User not found")),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to fetch profile: {}", e))),
        ),
    }
}

/// POST /api/profile/{id}
pub async fn update(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&db)
        .await;

    match existing {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to fetch user: {}", e))),
            );
        }
    }

    let result = sqlx::query("UPDATE users SET name = ?, contact = ?, address = ? WHERE id = ?")
        .bind(&payload.name)
        .bind((!payload.contact.is_empty()).then_some(payload.contact.as_str()))
        .bind((!payload.address.is_empty()).then_some(payload.address.as_str()))
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to update profile: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Profile updated successfully!", json!(null))),
    )
}

/// POST /api/profile/upload-picture/{id} - stores the picture and records
/// its URL on the user row.
pub async fn upload_picture(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(&db)
        .await;

    match existing {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("User not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to fetch user: {}", e))),
            );
        }
    }

    let field = match multipart.next_field().await {
        Ok(Some(field)) => field,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("No picture in request")),
            );
        }
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(&format!("Malformed upload: {}", e))),
            );
        }
    };

    let bytes = match field.bytes().await {
        Ok(bytes) => bytes,
        Err(e) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error(&format!("Failed to read upload: {}", e))),
            );
        }
    };

    let url = match save_bytes(&config.upload_dir, &bytes).await {
        Ok(url) => url,
        Err(e) => {
            eprintln!("Profile picture upload failed: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to store profile picture")),
            );
        }
    };

    let result = sqlx::query("UPDATE users SET profile_picture_url = ? WHERE id = ?")
        .bind(&url)
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to record profile picture: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "Profile picture uploaded successfully!",
            json!({ "profilePictureUrl": url }),
        )),
    )
}
