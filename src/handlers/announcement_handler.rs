use axum::extract::Path;
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::sync::Arc;
use validator::Validate;

use crate::config::settings::AppConfig;
use crate::handlers::upload_handler::resolve_image_reference;
use crate::models::announcement::Announcement;
use crate::schemas::announcement_schema::{AnnouncementRequest, AnnouncementResponse};
use crate::utils::response::{ApiResponse, validation_failure};

const ANNOUNCEMENT_COLUMNS: &str = "id, title, category, content, featured_image_url, \
    attachments_json, valid_until, posted_by, target_audience, created_at, updated_at";

fn to_responses(
    announcements: Vec<Announcement>,
) -> Result<Vec<AnnouncementResponse>, serde_json::Error> {
    announcements
        .into_iter()
        .map(AnnouncementResponse::from_model)
        .collect()
}

async fn fetch_announcement(
    db: &MySqlPool,
    id: i64,
) -> Result<Option<Announcement>, sqlx::Error> {
    sqlx::query_as::<_, Announcement>(&format!(
        "SELECT {} FROM announcements WHERE id = ?",
        ANNOUNCEMENT_COLUMNS
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

async fn list(
    db: &MySqlPool,
    sql: &str,
) -> Result<(StatusCode, Json<ApiResponse<Value>>), (StatusCode, Json<ApiResponse<Value>>)> {
    let announcements = sqlx::query_as::<_, Announcement>(sql)
        .fetch_all(db)
        .await
        .map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch announcements: {}",
                    e
                ))),
            )
        })?;

    let responses = to_responses(announcements).map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Corrupt attachments data: {}",
                e
            ))),
        )
    })?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Announcements", json!(responses))),
    ))
}

/// GET /api/admin/announcements
pub async fn admin_index(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match list(
        &db,
        &format!(
            "SELECT {} FROM announcements ORDER BY created_at DESC",
            ANNOUNCEMENT_COLUMNS
        ),
    )
    .await
    {
        Ok(response) | Err(response) => response,
    }
}

/// GET /api/announcements - citizen view, expired announcements excluded.
pub async fn public_index(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match list(
        &db,
        &format!(
            "SELECT {} FROM announcements \
             WHERE valid_until IS NULL OR valid_until >= CURDATE() \
             ORDER BY created_at DESC",
            ANNOUNCEMENT_COLUMNS
        ),
    )
    .await
    {
        Ok(response) | Err(response) => response,
    }
}

/// GET /api/news - the landing-page feed; the latest announcements
/// regardless of validity window.
pub async fn news(Extension(db): Extension<MySqlPool>) -> (StatusCode, Json<ApiResponse<Value>>) {
    match list(
        &db,
        &format!(
            "SELECT {} FROM announcements ORDER BY created_at DESC LIMIT 20",
            ANNOUNCEMENT_COLUMNS
        ),
    )
    .await
    {
        Ok(response) | Err(response) => response,
    }
}

/// POST /api/admin/announcements
pub async fn store(
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<AnnouncementRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let featured_image_url =
        match resolve_image_reference(&config.upload_dir, payload.featured_image_url.clone()).await
        {
            Ok(url) => url,
            Err(message) => {
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiResponse::error(&message)));
            }
        };

    let attachments_json = match serde_json::to_string(&payload.attachments_json) {
        Ok(encoded) => encoded,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to encode attachments: {}",
                    e
                ))),
            );
        }
    };

    let result = sqlx::query(
        "INSERT INTO announcements \
         (title, category, content, featured_image_url, attachments_json, valid_until, \
          posted_by, target_audience) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&payload.title)
    .bind(&payload.category)
    .bind(&payload.content)
    .bind(&featured_image_url)
    .bind(&attachments_json)
    .bind(payload.valid_until)
    .bind(&payload.posted_by)
    .bind(&payload.target_audience)
    .execute(&db)
    .await;

    let id = match result {
        Ok(result) => result.last_insert_id() as i64,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to create announcement: {}",
                    e
                ))),
            );
        }
    };

    match fetch_announcement(&db, id).await {
        Ok(Some(announcement)) => match AnnouncementResponse::from_model(announcement) {
            Ok(response) => (
                StatusCode::CREATED,
                Json(ApiResponse::success("Announcement created", json!(response))),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Corrupt attachments data: {}",
                    e
                ))),
            ),
        },
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load created announcement")),
        ),
    }
}

/// PUT /api/admin/announcements/{id}
pub async fn update(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<AnnouncementRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    match fetch_announcement(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Announcement not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch announcement: {}",
                    e
                ))),
            );
        }
    }

    let featured_image_url =
        match resolve_image_reference(&config.upload_dir, payload.featured_image_url.clone()).await
        {
            Ok(url) => url,
            Err(message) => {
                return (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiResponse::error(&message)));
            }
        };

    let attachments_json = match serde_json::to_string(&payload.attachments_json) {
        Ok(encoded) => encoded,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to encode attachments: {}",
                    e
                ))),
            );
        }
    };

    let result = sqlx::query(
        "UPDATE announcements \
         SET title = ?, category = ?, content = ?, featured_image_url = ?, \
             attachments_json = ?, valid_until = ?, posted_by = ?, target_audience = ? \
         WHERE id = ?",
    )
    .bind(&payload.title)
    .bind(&payload.category)
    .bind(&payload.content)
    .bind(&featured_image_url)
    .bind(&attachments_json)
    .bind(payload.valid_until)
    .bind(&payload.posted_by)
    .bind(&payload.target_audience)
    .bind(id)
    .execute(&db)
    .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to update announcement: {}",
                e
            ))),
        );
    }

    match fetch_announcement(&db, id).await {
        Ok(Some(announcement)) => match AnnouncementResponse::from_model(announcement) {
            Ok(response) => (
                StatusCode::OK,
                Json(ApiResponse::success("Announcement updated", json!(response))),
            ),
            Err(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Corrupt attachments data: {}",
                    e
                ))),
            ),
        },
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load updated announcement")),
        ),
    }
}

/// DELETE /api/admin/announcements/{id} - hard delete; announcements carry
/// no lifecycle state.
pub async fn delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match fetch_announcement(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Announcement not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch announcement: {}",
                    e
                ))),
            );
        }
    }

    let result = sqlx::query("DELETE FROM announcements WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to delete announcement: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Announcement deleted", json!(null))),
    )
}
