use axum::extract::Query;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::MySqlPool;

use crate::schemas::notification_schema::{
    MarkAsReadRequest, READABLE_CONTENT_TYPES, UnreadCounts, UnreadCountsQuery,
};
use crate::utils::response::ApiResponse;

/// Counts rows newer than the user's read marker for one content type; with
/// no marker yet, everything counts as unread.
async fn unread_for(
    db: &MySqlPool,
    user_id: i64,
    content_type: &str,
) -> Result<i64, sqlx::Error> {
    let marker = sqlx::query_scalar::<_, DateTime<Utc>>(
        "SELECT last_read_at FROM read_markers WHERE user_id = ? AND content_type = ?",
    )
    .bind(user_id)
    .bind(content_type)
    .fetch_optional(db)
    .await?;

    // the news feed and the announcements page both read from
    // announcements, each with its own marker
    let (count_all, count_since) = match content_type {
        "jobs" => (
            "SELECT COUNT(*) FROM threads WHERE post_type = 'job'",
            "SELECT COUNT(*) FROM threads WHERE post_type = 'job' AND created_at > ?",
        ),
        _ => (
            "SELECT COUNT(*) FROM announcements",
            "SELECT COUNT(*) FROM announcements WHERE created_at > ?",
        ),
    };

    match marker {
        Some(last_read_at) => {
            sqlx::query_scalar::<_, i64>(count_since)
                .bind(last_read_at)
                .fetch_one(db)
                .await
        }
        None => sqlx::query_scalar::<_, i64>(count_all).fetch_one(db).await,
    }
}

/// GET /api/unread-counts?userId=
pub async fn unread_counts(
    Extension(db): Extension<MySqlPool>,
    Query(query): Query<UnreadCountsQuery>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let result = futures::try_join!(
        unread_for(&db, query.user_id, "announcements"),
        unread_for(&db, query.user_id, "news"),
        unread_for(&db, query.user_id, "jobs"),
    );

    match result {
        Ok((announcements, news, jobs)) => {
            let counts = UnreadCounts {
                announcements,
                news,
                jobs,
            };

            (
                StatusCode::OK,
                Json(ApiResponse::success("Unread counts", json!(counts))),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to fetch unread counts: {}",
                e
            ))),
        ),
    }
}

/// POST /api/mark-as-read
pub async fn mark_as_read(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<MarkAsReadRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if !READABLE_CONTENT_TYPES.contains(&payload.content_type.as_str()) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error(&format!(
                "Unknown content type: {}",
                payload.content_type
            ))),
        );
    }

    let result = sqlx::query(
        "INSERT INTO read_markers (user_id, content_type, last_read_at) \
         VALUES (?, ?, NOW()) \
         ON DUPLICATE KEY UPDATE last_read_at = NOW()",
    )
    .bind(payload.user_id)
    .bind(&payload.content_type)
    .execute(&db)
    .await;

    match result {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse::success("Marked as read", json!(null))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to mark as read: {}",
                e
            ))),
        ),
    }
}
