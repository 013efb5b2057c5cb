use axum::extract::{Multipart, Path};
use axum::{Extension, Json, http::StatusCode};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::sync::Arc;
use validator::Validate;

use crate::config::settings::AppConfig;
use crate::handlers::upload_handler::{resolve_image_reference, save_bytes};
use crate::models::service::Service;
use crate::schemas::service_schema::ServiceRequest;
use crate::utils::response::{ApiResponse, validation_failure};

const SERVICE_COLUMNS: &str = "id, title, category, description, featured_image_url, \
    contact_person, contact_number, availability, department, requirements_list, \
    created_at, updated_at";

async fn fetch_service(db: &MySqlPool, id: i64) -> Result<Option<Service>, sqlx::Error> {
    sqlx::query_as::<_, Service>(&format!(
        "SELECT {} FROM services WHERE id = ?",
        SERVICE_COLUMNS
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

async fn list_services(
    db: &MySqlPool,
) -> Result<Vec<Service>, (StatusCode, Json<ApiResponse<Value>>)> {
    sqlx::query_as::<_, Service>(&format!(
        "SELECT {} FROM services ORDER BY title",
        SERVICE_COLUMNS
    ))
    .fetch_all(db)
    .await
    .map_err(|e| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to fetch services: {}",
                e
            ))),
        )
    })
}

/// GET /api/services and GET /api/admin/services
pub async fn index(Extension(db): Extension<MySqlPool>) -> (StatusCode, Json<ApiResponse<Value>>) {
    match list_services(&db).await {
        Ok(services) => (
            StatusCode::OK,
            Json(ApiResponse::success("Services", json!(services))),
        ),
        Err(response) => response,
    }
}

/// POST /api/admin/services/upload-image - single `media` part, returns the
/// stored image URL.
pub async fn upload_image(
    Extension(config): Extension<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Malformed upload: {}", e))),
                );
            }
        };

        if field.name() != Some("media") && field.name() != Some("image") {
            continue;
        }

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Failed to read upload: {}", e))),
                );
            }
        };

        return match save_bytes(&config.upload_dir, &bytes).await {
            Ok(url) => (
                StatusCode::OK,
                Json(ApiResponse::success(
                    "Image uploaded",
                    json!({ "imageUrl": url, "mediaUrls": [url] }),
                )),
            ),
            Err(e) => {
                eprintln!("Service image upload failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ApiResponse::error("Failed to store uploaded image")),
                )
            }
        };
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error("No image file in request")),
    )
}

/// POST /api/admin/services
pub async fn store(
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<ServiceRequest>,
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

    let requirements_list = match serde_json::to_string(&payload.requirements_list) {
        Ok(encoded) => encoded,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to encode requirements: {}",
                    e
                ))),
            );
        }
    };

    let result = sqlx::query(
        "INSERT INTO services \
         (title, category, description, featured_image_url, contact_person, contact_number, \
          availability, department, requirements_list) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(&payload.title)
    .bind(&payload.category)
    .bind(&payload.description)
    .bind(&featured_image_url)
    .bind(&payload.contact_person)
    .bind((!payload.contact_number.is_empty()).then_some(payload.contact_number.as_str()))
    .bind(&payload.availability)
    .bind(&payload.department)
    .bind(&requirements_list)
    .execute(&db)
    .await;

    let id = match result {
        Ok(result) => result.last_insert_id() as i64,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to create service: {}",
                    e
                ))),
            );
        }
    };

    match fetch_service(&db, id).await {
        Ok(Some(service)) => (
            StatusCode::CREATED,
            Json(ApiResponse::success("Service created", json!(service))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load created service")),
        ),
    }
}

/// PUT /api/admin/services/{id}
pub async fn update(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<ServiceRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    match fetch_service(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Service not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch service: {}",
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

    let requirements_list = match serde_json::to_string(&payload.requirements_list) {
        Ok(encoded) => encoded,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to encode requirements: {}",
                    e
                ))),
            );
        }
    };

    let result = sqlx::query(
        "UPDATE services \
         SET title = ?, category = ?, description = ?, featured_image_url = ?, \
             contact_person = ?, contact_number = ?, availability = ?, department = ?, \
             requirements_list = ? \
         WHERE id = ?",
    )
    .bind(&payload.title)
    .bind(&payload.category)
    .bind(&payload.description)
    .bind(&featured_image_url)
    .bind(&payload.contact_person)
    .bind((!payload.contact_number.is_empty()).then_some(payload.contact_number.as_str()))
    .bind(&payload.availability)
    .bind(&payload.department)
    .bind(&requirements_list)
    .bind(id)
    .execute(&db)
    .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to update service: {}",
                e
            ))),
        );
    }

    match fetch_service(&db, id).await {
        Ok(Some(service)) => (
            StatusCode::OK,
            Json(ApiResponse::success("Service updated", json!(service))),
        ),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to load updated service")),
        ),
    }
}

/// DELETE /api/admin/services/{id}
pub async fn delete(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    match fetch_service(&db, id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Service not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch service: {}",
                    e
                ))),
            );
        }
    }

    let result = sqlx::query("DELETE FROM services WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to delete service: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success("Service deleted", json!(null))),
    )
}
