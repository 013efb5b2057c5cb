use axum::extract::{Multipart, Path, Query};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, http::StatusCode};
use chrono::Utc;
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::str::FromStr;
use std::sync::Arc;
use tokio::fs;
use validator::Validate;

use crate::config::settings::AppConfig;
use crate::models::document::{
    DocumentApplication, DocumentStatus, DocumentType, TransitionError, validate_approval,
    validate_status_update,
};
use crate::schemas::document_schema::{
    CancelApplicationRequest, DocumentApplicationResponse, DocumentQuery, ExportQuery,
    GenerateApproveRequest, UpdateStatusRequest,
};
use crate::utils::listing::{SortDirection, filter_and_sort, text_key};
use crate::utils::pdf::{self, CertificateData};
use crate::utils::response::{ApiResponse, validation_failure};

#[cfg(test)]
#[path = "document_handler/tests.rs"]
mod tests;

const APPLICATION_COLUMNS: &str = "id, document_type, full_name, purok, birthdate, user_email, \
    purpose, requirements_details, payment_method, payment_reference_number, requirements_json, \
    status, rejection_reason, generated_path, hidden_from_history, date_requested";

async fn fetch_application(
    db: &MySqlPool,
    id: i64,
) -> Result<Option<DocumentApplication>, sqlx::Error> {
    sqlx::query_as::<_, DocumentApplication>(&format!(
        "SELECT {} FROM document_applications WHERE id = ?",
        APPLICATION_COLUMNS
    ))
    .bind(id)
    .fetch_optional(db)
    .await
}

fn to_responses(
    applications: Vec<DocumentApplication>,
) -> Result<Vec<DocumentApplicationResponse>, serde_json::Error> {
    applications
        .into_iter()
        .map(DocumentApplicationResponse::from_model)
        .collect()
}

/// Maps a refused transition to its HTTP status. State conflicts are 409,
/// bad input is 422.
fn transition_failure(error: TransitionError) -> (StatusCode, Json<ApiResponse<Value>>) {
    let status = match error {
        TransitionError::Terminal { .. } | TransitionError::NotPermitted { .. } => {
            StatusCode::CONFLICT
        }
        TransitionError::UnknownStatus(_)
        | TransitionError::MissingRejectionReason
        | TransitionError::ApprovalRequiresGeneration => StatusCode::UNPROCESSABLE_ENTITY,
    };

    (status, Json(ApiResponse::error(&error.to_string())))
}

/// GET /api/admin/documents - the full collection, filtered and sorted
/// according to the table controls.
pub async fn admin_index(
    Extension(db): Extension<MySqlPool>,
    Query(query): Query<DocumentQuery>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let applications = match sqlx::query_as::<_, DocumentApplication>(&format!(
        "SELECT {} FROM document_applications",
        APPLICATION_COLUMNS
    ))
    .fetch_all(&db)
    .await
    {
        Ok(applications) => applications,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch documents: {}",
                    e
                ))),
            );
        }
    };

    let search = query.search.unwrap_or_default();
    let status_filter = query.status.unwrap_or_default();
    let type_filter = query.document_type.unwrap_or_default();
    let sort_by = query.sort_by.unwrap_or_else(|| "dateRequested".to_string());
    let direction = query
        .sort_dir
        .map(|dir| SortDirection::from_param(&dir))
        .unwrap_or(SortDirection::Descending);

    let keep = |app: &DocumentApplication| {
        (status_filter.is_empty() || status_filter == "All" || app.status == status_filter)
            && (type_filter.is_empty()
                || type_filter == "All"
                || app.document_type == type_filter)
    };

    let view = match sort_by.as_str() {
        "id" => filter_and_sort(applications, &search, keep, |app| app.id, direction),
        "fullName" => filter_and_sort(
            applications,
            &search,
            keep,
            |app| text_key(&app.full_name),
            direction,
        ),
        "documentType" => filter_and_sort(
            applications,
            &search,
            keep,
            |app| text_key(&app.document_type),
            direction,
        ),
        "status" => filter_and_sort(
            applications,
            &search,
            keep,
            |app| text_key(&app.status),
            direction,
        ),
        _ => filter_and_sort(
            applications,
            &search,
            keep,
            |app| app.date_requested,
            direction,
        ),
    };

    match to_responses(view) {
        Ok(responses) => (
            StatusCode::OK,
            Json(ApiResponse::success("Document applications", json!(responses))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Corrupt requirements data: {}",
                e
            ))),
        ),
    }
}

/// POST /api/admin/documents/update-status/{id} - plain status transition,
/// no generation side effect. `Approved` is refused here; that path runs
/// through generate-and-approve.
pub async fn update_status(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<UpdateStatusRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let requested = match DocumentStatus::from_str(&payload.new_status) {
        Ok(status) => status,
        Err(error) => return transition_failure(error),
    };

    let application = match fetch_application(&db, id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Document application not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch document: {}",
                    e
                ))),
            );
        }
    };

    let current = match application.status() {
        Ok(status) => status,
        Err(error) => return transition_failure(error),
    };

    if let Err(error) =
        validate_status_update(current, requested, payload.rejection_reason.as_deref())
    {
        return transition_failure(error);
    }

    // rejection_reason is stored only for Rejected rows, cleared otherwise
    let rejection_reason = if requested == DocumentStatus::Rejected {
        payload.rejection_reason.as_deref().map(str::trim)
    } else {
        None
    };

    let result = sqlx::query(
        "UPDATE document_applications SET status = ?, rejection_reason = ? WHERE id = ?",
    )
    .bind(requested.as_str())
    .bind(rejection_reason)
    .bind(id)
    .execute(&db)
    .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to update status: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            &format!("Document #{} status updated to {}", id, requested),
            json!({ "id": id, "status": requested.as_str() }),
        )),
    )
}

fn generation_failure(status: StatusCode, message: &str) -> Response {
    (status, Json(ApiResponse::<Value>::error(message))).into_response()
}

/// POST /api/admin/documents/generate-and-approve/{id}
///
/// Renders the certificate from the selected template and, only once the
/// artifact exists on disk, flips the row to Approved with its generated
/// path in a single statement. Any failure before that leaves the
/// application untouched. Responds with the PDF bytes and a
/// `Content-Disposition` filename.
pub async fn generate_and_approve(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<GenerateApproveRequest>,
) -> Response {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors).into_response();
    }

    // The echoed status defaults to Approved and may only ever be a
    // post-generation state.
    let new_status = match payload.new_status.as_deref() {
        None => DocumentStatus::Approved,
        Some(raw) => match DocumentStatus::from_str(raw) {
            Ok(DocumentStatus::Approved) => DocumentStatus::Approved,
            Ok(DocumentStatus::Completed) => DocumentStatus::Completed,
            Ok(other) => {
                return generation_failure(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    &format!("Cannot generate a document into status {}", other),
                );
            }
            Err(error) => return transition_failure(error).into_response(),
        },
    };

    let application = match fetch_application(&db, id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return generation_failure(StatusCode::NOT_FOUND, "Document application not found");
        }
        Err(e) => {
            return generation_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to fetch document: {}", e),
            );
        }
    };

    let current = match application.status() {
        Ok(status) => status,
        Err(error) => return transition_failure(error).into_response(),
    };

    if let Err(error) = validate_approval(current) {
        return transition_failure(error).into_response();
    }

    let document_type = match DocumentType::from_str(&application.document_type) {
        Ok(kind) => kind,
        Err(e) => {
            return generation_failure(StatusCode::INTERNAL_SERVER_ERROR, &e);
        }
    };

    // Only templates registered for this application's type are acceptable
    if !config
        .templates
        .is_registered(document_type, &payload.template_file_name)
    {
        return generation_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            &format!(
                "Template '{}' is not registered for {}",
                payload.template_file_name, document_type
            ),
        );
    }

    let template_path = format!("{}/{}", config.template_dir, payload.template_file_name);
    let template_bytes = match fs::read(&template_path).await {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Template read failed ({}): {}", template_path, e);
            return generation_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Template file is missing on the server",
            );
        }
    };

    let certificate = CertificateData {
        application_id: application.id,
        full_name: &application.full_name,
        document_type: &application.document_type,
        purok: application.purok.as_deref(),
        purpose: application.purpose.as_deref(),
        issued_on: Utc::now().format("%Y-%m-%d").to_string(),
    };

    let rendered = match pdf::render_certificate(&template_bytes, &certificate) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("Generation failed for document {}: {}", id, e);
            return generation_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Could not generate the document from the selected template",
            );
        }
    };

    let file_name = pdf::generated_file_name(
        application.id,
        &application.document_type,
        &application.full_name,
    );

    if let Err(e) = fs::create_dir_all(&config.generated_dir).await {
        eprintln!("Failed to prepare generated dir: {}", e);
        return generation_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store the generated document",
        );
    }
    if let Err(e) = fs::write(format!("{}/{}", config.generated_dir, file_name), &rendered).await {
        eprintln!("Failed to write generated document: {}", e);
        return generation_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store the generated document",
        );
    }

    let generated_path = format!("/generated/{}", file_name);

    // generate succeeded; approve and record the artifact together
    let result = sqlx::query(
        "UPDATE document_applications \
         SET status = ?, generated_path = ?, rejection_reason = NULL WHERE id = ?",
    )
    .bind(new_status.as_str())
    .bind(&generated_path)
    .bind(id)
    .execute(&db)
    .await;

    if let Err(e) = result {
        eprintln!("Approve update failed for document {}: {}", id, e);
        return generation_failure(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Document was generated but the status update failed",
        );
    }

    println!(
        "Document {} generated from '{}' and set to {}",
        id, payload.template_file_name, new_status
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        rendered,
    )
        .into_response()
}

/// GET /api/admin/documents/export?format=csv|xlsx
pub async fn export(
    Extension(db): Extension<MySqlPool>,
    Query(query): Query<ExportQuery>,
) -> Response {
    let applications = match sqlx::query_as::<_, DocumentApplication>(&format!(
        "SELECT {} FROM document_applications ORDER BY id",
        APPLICATION_COLUMNS
    ))
    .fetch_all(&db)
    .await
    {
        Ok(applications) => applications,
        Err(e) => {
            return generation_failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                &format!("Failed to fetch documents: {}", e),
            );
        }
    };

    let format = query.format.unwrap_or_else(|| "csv".to_string());

    match format.as_str() {
        "xlsx" => match export_xlsx(&applications) {
            Ok(bytes) => file_download(
                bytes,
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                "document_applications.xlsx",
            ),
            Err(message) => generation_failure(StatusCode::INTERNAL_SERVER_ERROR, &message),
        },
        "csv" => match export_csv(&applications) {
            Ok(bytes) => file_download(bytes, "text/csv", "document_applications.csv"),
            Err(message) => generation_failure(StatusCode::INTERNAL_SERVER_ERROR, &message),
        },
        other => generation_failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            &format!("Unsupported export format: {}", other),
        ),
    }
}

fn file_download(bytes: Vec<u8>, content_type: &str, file_name: &str) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response()
}

const EXPORT_HEADER: [&str; 7] = [
    "ID",
    "Applicant",
    "Document Type",
    "Status",
    "Email",
    "Date Requested",
    "Rejection Reason",
];

fn export_row(app: &DocumentApplication) -> [String; 7] {
    [
        app.id.to_string(),
        app.full_name.clone(),
        app.document_type.clone(),
        app.status.clone(),
        app.user_email.clone(),
        app.date_requested
            .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default(),
        app.rejection_reason.clone().unwrap_or_default(),
    ]
}

fn export_csv(applications: &[DocumentApplication]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| format!("CSV write failed: {}", e))?;

    for app in applications {
        writer
            .write_record(export_row(app))
            .map_err(|e| format!("CSV write failed: {}", e))?;
    }

    writer
        .into_inner()
        .map_err(|e| format!("CSV flush failed: {}", e))
}

fn export_xlsx(applications: &[DocumentApplication]) -> Result<Vec<u8>, String> {
    let mut workbook = rust_xlsxwriter::Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, title) in EXPORT_HEADER.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *title)
            .map_err(|e| format!("XLSX write failed: {}", e))?;
    }

    for (row, app) in applications.iter().enumerate() {
        for (col, value) in export_row(app).iter().enumerate() {
            worksheet
                .write_string(row as u32 + 1, col as u16, value)
                .map_err(|e| format!("XLSX write failed: {}", e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("XLSX save failed: {}", e))
}

/// POST /api/documents/apply - citizen submission; every application starts
/// life as Pending.
pub async fn apply(
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    mut multipart: Multipart,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let mut document_type = String::new();
    let mut user_email = String::new();
    let mut full_name = String::new();
    let mut purok = String::new();
    let mut birthdate = String::new();
    let mut purpose = String::new();
    let mut requirements_details = String::new();
    let mut payment_method = String::new();
    let mut payment_reference_number = String::new();
    let mut requirement_paths: Vec<String> = Vec::new();

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Malformed submission: {}", e))),
                );
            }
        };

        let name = field.name().unwrap_or("").to_string();

        if name == "requirements" {
            let bytes = match field.bytes().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    return (
                        StatusCode::BAD_REQUEST,
                        Json(ApiResponse::error(&format!(
                            "Failed to read requirement file: {}",
                            e
                        ))),
                    );
                }
            };
            match crate::handlers::upload_handler::save_bytes(&config.upload_dir, &bytes).await {
                Ok(path) => requirement_paths.push(path),
                Err(e) => {
                    eprintln!("Requirement upload failed: {}", e);
                    return (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ApiResponse::error("Failed to store requirement file")),
                    );
                }
            }
            continue;
        }

        let value = match field.text().await {
            Ok(value) => value,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ApiResponse::error(&format!("Malformed field: {}", e))),
                );
            }
        };

        match name.as_str() {
            "document_type" => document_type = value,
            "user_email" => user_email = value,
            "full_name" => full_name = value,
            "purok" => purok = value,
            "birthdate" => birthdate = value,
            "purpose" => purpose = value,
            "requirements_details" => requirements_details = value,
            "payment_method" => payment_method = value,
            "payment_reference_number" => payment_reference_number = value,
            _ => {}
        }
    }

    if full_name.is_empty() || user_email.is_empty() || !user_email.contains('@') {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error("Full name and a valid email are required")),
        );
    }

    let document_type = match DocumentType::from_str(&document_type) {
        Ok(kind) => kind,
        Err(e) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(ApiResponse::error(&e)));
        }
    };

    let birthdate = match birthdate.as_str() {
        "" => None,
        raw => match chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                return (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ApiResponse::error("Birthdate must be YYYY-MM-DD")),
                );
            }
        },
    };

    let requirements_json = match serde_json::to_string(&requirement_paths) {
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
        "INSERT INTO document_applications \
         (document_type, full_name, purok, birthdate, user_email, purpose, \
          requirements_details, payment_method, payment_reference_number, \
          requirements_json, status) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'Pending')",
    )
    .bind(document_type.as_str())
    .bind(&full_name)
    .bind((!purok.is_empty()).then_some(purok))
    .bind(birthdate)
    .bind(&user_email)
    .bind((!purpose.is_empty()).then_some(purpose))
    .bind((!requirements_details.is_empty()).then_some(requirements_details))
    .bind((!payment_method.is_empty()).then_some(payment_method))
    .bind((!payment_reference_number.is_empty()).then_some(payment_reference_number))
    .bind(&requirements_json)
    .execute(&db)
    .await;

    match result {
        Ok(result) => {
            let id = result.last_insert_id() as i64;
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    "Application submitted successfully",
                    json!({ "id": id, "status": DocumentStatus::Pending.as_str() }),
                )),
            )
        }
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to submit application: {}",
                e
            ))),
        ),
    }
}

/// GET /api/documents/history/{email}
pub async fn history(
    Path(email): Path<String>,
    Extension(db): Extension<MySqlPool>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let applications = match sqlx::query_as::<_, DocumentApplication>(&format!(
        "SELECT {} FROM document_applications \
         WHERE user_email = ? AND hidden_from_history = 0 \
         ORDER BY date_requested DESC",
        APPLICATION_COLUMNS
    ))
    .bind(&email)
    .fetch_all(&db)
    .await
    {
        Ok(applications) => applications,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch history: {}",
                    e
                ))),
            );
        }
    };

    match to_responses(applications) {
        Ok(responses) => (
            StatusCode::OK,
            Json(ApiResponse::success("Application history", json!(responses))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Corrupt requirements data: {}",
                e
            ))),
        ),
    }
}

/// POST /api/documents/cancel/{id} - citizens may cancel their own
/// application while it is still Pending.
pub async fn cancel(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<CancelApplicationRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let application = match fetch_application(&db, id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Document application not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch document: {}",
                    e
                ))),
            );
        }
    };

    if application.user_email != payload.user_email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "You can only cancel your own applications",
            )),
        );
    }

    let current = match application.status() {
        Ok(status) => status,
        Err(error) => return transition_failure(error),
    };

    if current != DocumentStatus::Pending {
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Only pending applications can be cancelled",
            )),
        );
    }

    if let Err(error) = validate_status_update(current, DocumentStatus::Cancelled, None) {
        return transition_failure(error);
    }

    let result = sqlx::query("UPDATE document_applications SET status = 'Cancelled' WHERE id = ?")
        .bind(id)
        .execute(&db)
        .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!("Failed to cancel: {}", e))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            &format!("Application {} has been cancelled", id),
            json!({ "id": id, "status": DocumentStatus::Cancelled.as_str() }),
        )),
    )
}

/// POST /api/documents/remove-from-history/{id} - hides a finished
/// application from the citizen's history view; the record is kept.
pub async fn remove_from_history(
    Path(id): Path<i64>,
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<CancelApplicationRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    let application = match fetch_application(&db, id).await {
        Ok(Some(application)) => application,
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("Document application not found")),
            );
        }
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(&format!(
                    "Failed to fetch document: {}",
                    e
                ))),
            );
        }
    };

    if application.user_email != payload.user_email {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "You can only manage your own applications",
            )),
        );
    }

    let current = match application.status() {
        Ok(status) => status,
        Err(error) => return transition_failure(error),
    };

    if !current.is_terminal() {
        return (
            StatusCode::CONFLICT,
            Json(ApiResponse::error(
                "Only finished applications can be removed from history",
            )),
        );
    }

    let result =
        sqlx::query("UPDATE document_applications SET hidden_from_history = 1 WHERE id = ?")
            .bind(id)
            .execute(&db)
            .await;

    if let Err(e) = result {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(&format!(
                "Failed to remove from history: {}",
                e
            ))),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "Application removed from history",
            json!({ "id": id }),
        )),
    )
}
