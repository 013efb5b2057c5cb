use axum::extract::Path;
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use validator::Validate;

use crate::models::contact_message::ContactMessage;
use crate::schemas::contact_schema::ContactMessageRequest;
use crate::utils::response::{ApiResponse, validation_failure};

/// POST /api/contact-message
pub async fn store(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<ContactMessageRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let result = sqlx::query(
        "INSERT INTO contact_messages (name, email, subject, message) VALUES (?, ?, ?, ?)",
    )
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.subject)
    .bind(&payload.message)
    .execute(&db)
    .await;

    match result {
        Ok(_) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                "Message sent. The barangay office will get back to you.",
                json!(null),
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to send message: {}", e))),
        ),
    }
}

/// GET /api/admin/contact-messages
pub async fn admin_index(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let messages = match sqlx::query_as::<_, ContactMessage>(
        "SELECT id, name, email, subject, message, created_at \
         FROM contact_messages ORDER BY created_at DESC",
    )
    .fetch_all(&db)
    .await
    {
        Ok(messages) => messages,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch messages: {}",
                    e
                ))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success("Contact messages", json!(messages))),
    )
}

/// DELETE /api/admin/contact-messages/{id}
pub async fn admin_delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let existing = sqlx::query_scalar::<_, i64>("SELECT id FROM contact_messages WHERE id = ?")
        .bind(id)
        .fetch_optional(&db)
        .await;

    match existing {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Message not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch message: {}",
                    e
                ))),
            );
        }
    }

    let result = sqlx::query("DELETE FROM contact_messages WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to delete message: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Message deleted", json!(null))),
    )
}
