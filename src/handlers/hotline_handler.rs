use axum::extract::Path;
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use validator::Validate;

use crate::models::hotline::Hotline;
use crate::schemas::hotline_schema::HotlineRequest;
use crate::utils::response::{ApiResponse, validation_failure};

const HOTLINE_COLUMNS: &str =
    "id, title, hotline_number, description, category, created_at, updated_at";

async fn fetch_hotline(db: &MySqlPool, id: i64) -> Result<Option<Hotline>, sqlx::Error> {
    sqlx::query_as::<_, Hotline>(&format!(
        "SELECT {} FROM hotlines WHERE id = ?",
        HOTLINE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

/// GET /api/hotlines
pub async fn index(Extension(db): Extension<MySqlPool>) -> (StatusCode, Json<ApiResponse<Value>>) {
    let hotlines = match sqlx::query_as::<_, Hotline>(&format!(
        "SELECT {} FROM hotlines ORDER BY id",
        HOTLINE_COLUMNS
    ))
    .fetch_all(&db)
    .await
    {
        Ok(hotlines) => hotlines,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch hotlines: {}",
                    e
                ))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success("Hotlines", json!(hotlines))),
    )
}

/// POST /api/hotlines
pub async fn store(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<HotlineRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let result = sqlx::query(
        "INSERT INTO hotlines (title, hotline_number, description, category) VALUES (?, ?, ?, ?)",
    )
    .bind(&payload.title)
    .bind(&payload.hotline_number)
    .bind(&payload.description)
    .bind(&payload.category)
    .execute(&db)
    .await;

    let id = match result {
        Ok(result) => result.last_insert_id() as i64,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to create hotline: {}",
                    e
                ))),
            );
        }
    };

    match fetch_hotline(&db, id).await {
        Ok(Some(hotline)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success("Hotline created", json!(hotline))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load created hotline")),
        ),
    }
}

/// PUT /api/hotlines/{id}
pub async fn update(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<HotlineRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    match fetch_hotline(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Hotline not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch hotline: {}",
                    e
                ))),
            );
        }
    }

    let result = sqlx::query(
        "UPDATE hotlines SET title = ?, hotline_number = ?, description = ?, category = ? \
         WHERE id = ?",
    )
    .bind(&payload.title)
    .bind(&payload.hotline_number)
    .bind(&payload.description)
    .bind(&payload.category)
    .bind(id)
    .execute(&db)
    .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to update hotline: {}",
                e
            ))),
        );
    }

    match fetch_hotline(&db, id).await {
        Ok(Some(hotline)) => (
            StatusCode::OK,
            Json(ApiResponse::success("Hotline updated", json!(hotline))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load updated hotline")),
        ),
    }
}

/// DELETE /api/hotlines/{id}
pub async fn delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match fetch_hotline(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Hotline not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch hotline: {}",
                    e
                ))),
            );
        }
    }

    let result = sqlx::query("DELETE FROM hotlines WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to delete hotline: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Hotline deleted", json!(null))),
    )
}
