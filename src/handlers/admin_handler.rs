use axum::extract::Path;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::MySqlPool;

use crate::utils::response::ApiResponse;

async fn count(db: &MySqlPool, sql: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(sql).fetch_one(db).await
}

/// GET /api/admin/dashboard-stats
pub async fn dashboard_stats(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let result = futures::try_join!(
        count(&db, "SELECT COUNT(*) FROM users WHERE role = 'resident'"),
        count(
            &db,
            "SELECT COUNT(*) FROM document_applications WHERE status = 'Pending'"
        ),
        count(&db, "SELECT COUNT(*) FROM announcements"),
        count(&db, "SELECT COUNT(*) FROM contact_messages"),
        count(&db, "SELECT COUNT(*) FROM threads"),
    );

    match result {
        Ok((residents, pending_documents, announcements, contact_messages, threads)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                "Dashboard statistics",
                json!({
                    "residents": residents,
                    "pendingDocuments": pending_documents,
                    "announcements": announcements,
                    "contactMessages": contact_messages,
                    "threads": threads,
                }),
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to fetch stats: {}", e))),
        ),
    }
}

type UserRow = (i64, String, String, String, bool, Option<DateTime<Utc>>);

/// GET /api/admin/users
pub async fn users_index(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let rows = sqlx::query_as::<_, UserRow>(
        "SELECT id, name, email, role, is_verified, created_at FROM users ORDER BY id",
    )
    .fetch_all(&db)
    .await;

    match rows {
        Ok(rows) => {
            let users: Vec<Value> = rows
                .into_iter()
                .map(|(id, name, email, role, is_verified, created_at)| {
                    json!({
                        "id": id,
                        "name": name,
                        "email": email,
                        "role": role,
                        "isVerified": is_verified,
                        "created_at": created_at,
                    })
                })
                .collect();

            (
                StatusCode::OK,
                Json(ApiResponse::success("Users", json!(users))),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to fetch users: {}", e))),
        ),
    }
}

/// DELETE /api/admin/users/{id}
pub async fn users_delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
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

    let result = sqlx::query("DELETE FROM users WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to delete user: {}", e))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("User deleted", json!(null))),
    )
}
