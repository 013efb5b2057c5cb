use axum::extract::{Path, Query};
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use validator::Validate;

use crate::models::thread::{JOB_TAG_OPTIONS, THREAD_TYPES, Thread, ThreadResponse};
use crate::schemas::thread_schema::{
    ContentSummary, JobQuery, ResponseStoreRequest, ThreadStoreRequest,
};
use crate::utils::response::{ApiResponse, validation_failure};

const THREAD_COLUMNS: &str = "id, user_id, post_type, title, post_content, post_category, \
    contact_number, media_json, is_admin_post, created_at";

async fn fetch_thread(db: &MySqlPool, id: i64) -> Result<Option<Thread>, sqlx::Error> {
    sqlx::query_as::<_, Thread>(&format!(
        "SELECT {} FROM threads WHERE id = ?",
        THREAD_COLUMNS
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

/// POST /api/threads
pub async fn store(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<ThreadStoreRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let media_json = match serde_json::to_string(&payload.media_urls) {
        Ok(encoded) => encoded,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to encode media: {}", e))),
            );
        }
    };

    let result = sqlx::query(
        "INSERT INTO threads \
         (user_id, post_type, title, post_content, post_category, contact_number, \
          media_json, is_admin_post) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(payload.user_id)
    .bind(&payload.post_type)
    .bind(&payload.title)
    .bind(&payload.post_content)
    .bind((!payload.post_category.is_empty()).then_some(payload.post_category.as_str()))
    .bind((!payload.contact_number.is_empty()).then_some(payload.contact_number.as_str()))
    .bind(&media_json)
    .bind(payload.is_admin_post)
    .execute(&db)
    .await;

    let id = match result {
        Ok(result) => result.last_insert_id() as i64,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to create post: {}", e))),
            );
        }
    };

    match fetch_thread(&db, id).await {
        Ok(Some(thread)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success("Post created", json!(thread))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load created post")),
        ),
    }
}

/// DELETE /api/threads/{id} - moderation removal; responses go with the
/// thread in one transaction.
pub async fn delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match fetch_thread(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Thread not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to fetch thread: {}", e))),
            );
        }
    }

    let mut tx = match db.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to start delete: {}", e))),
            );
        }
    };

    if let Err(e) = sqlx::query("DELETE FROM thread_responses WHERE thread_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to delete responses: {}",
                e
            ))),
        );
    }

    if let Err(e) = sqlx::query("DELETE FROM threads WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await
    {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to delete thread: {}", e))),
        );
    }

    if let Err(e) = tx.commit().await {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to commit delete: {}", e))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Thread deleted", json!(null))),
    )
}

/// GET /api/jobs?category= - public job board.
pub async fn jobs(
    Extension(db): Extension<MySqlPool>,
    Query(query): Query<JobQuery>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let category = query.category.unwrap_or_default();

    let result = if category.is_empty() || category == "All" {
        sqlx::query_as::<_, Thread>(&format!(
            "SELECT {} FROM threads WHERE post_type = 'job' ORDER BY created_at DESC",
            THREAD_COLUMNS
        ))
        .fetch_all(&db)
        .await
    } else {
        sqlx::query_as::<_, Thread>(&format!(
            "SELECT {} FROM threads \
             WHERE post_type = 'job' AND post_category = ? ORDER BY created_at DESC",
            THREAD_COLUMNS
        ))
        .bind(&category)
        .fetch_all(&db)
        .await
    };

    match result {
        Ok(threads) => (
            StatusCode::OK,
            Json(ApiResponse::success("Job listings", json!(threads))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to fetch jobs: {}", e))),
        ),
    }
}

/// GET /api/job-categories
pub async fn job_categories() -> (StatusCode, Json<ApiResponse<Value>>) {
    (
        StatusCode::OK,
        Json(ApiResponse::success("Job categories", json!(JOB_TAG_OPTIONS))),
    )
}

/// GET /api/admin/jobs/all
pub async fn admin_jobs(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let threads = match sqlx::query_as::<_, Thread>(&format!(
        "SELECT {} FROM threads WHERE post_type = 'job' ORDER BY created_at DESC",
        THREAD_COLUMNS
    ))
    .fetch_all(&db)
    .await
    {
        Ok(threads) => threads,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to fetch jobs: {}", e))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success("Job listings", json!(threads))),
    )
}

/// GET /api/admin/content/all - every thread with its response count, for
/// the moderation screen.
pub async fn content_all(
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let summaries = match sqlx::query_as::<_, ContentSummary>(
        "SELECT t.id, t.post_type AS content_type, t.title, \
                COALESCE(u.name, 'Unknown') AS posted_by, \
                COUNT(r.id) AS response_count, t.created_at \
         FROM threads t \
         LEFT JOIN users u ON u.id = t.user_id \
         LEFT JOIN thread_responses r ON r.thread_id = t.id \
         GROUP BY t.id, t.post_type, t.title, u.name, t.created_at \
         ORDER BY t.created_at DESC",
    )
    .fetch_all(&db)
    .await
    {
        Ok(summaries) => summaries,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch content: {}",
                    e
                ))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success("Community content", json!(summaries))),
    )
}

/// GET /api/admin/content/{type}/responses/{id} and
/// GET /api/responses/{thread_type}/{thread_id}
pub async fn responses_for(
    Path((thread_type, thread_id)): Path<(String, i64)>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if !THREAD_TYPES.contains(&thread_type.as_str()) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(&format!(
                "Unknown content type: {}",
                thread_type
            ))),
        );
    }

    let responses = match sqlx::query_as::<_, ThreadResponse>(
        "SELECT r.id, r.thread_id, r.user_id, r.response_content, r.created_at \
         FROM thread_responses r \
         JOIN threads t ON t.id = r.thread_id \
         WHERE r.thread_id = ? AND t.post_type = ? \
         ORDER BY r.created_at",
    )
    .bind(thread_id)
    .bind(&thread_type)
    .fetch_all(&db)
    .await
    {
        Ok(responses) => responses,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch responses: {}",
                    e
                ))),
            );
        }
    };

    (
        StatusCode::OK,
        Json(ApiResponse::success("Responses", json!(responses))),
    )
}

/// POST /api/responses - reply to a thread / apply to a job.
pub async fn store_response(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<ResponseStoreRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    match fetch_thread(&db, payload.thread_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Thread not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!("Failed to fetch thread: {}", e))),
            );
        }
    }

    let result = sqlx::query(
        "INSERT INTO thread_responses (thread_id, user_id, response_content) VALUES (?, ?, ?)",
    )
    .bind(payload.thread_id)
    .bind(payload.user_id)
    .bind(&payload.response_content)
    .execute(&db)
    .await;

    match result {
        Ok(result) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                "Response posted",
                json!({ "id": result.last_insert_id() as i64 }),
            )),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to post response: {}",
                e
            ))),
        ),
    }
}
