use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde_json::{Value, json};
use sqlx::MySqlPool;
use std::sync::Arc;
use validator::Validate;

use crate::config::settings::AppConfig;
use crate::schemas::auth_schema::{
    RequestCodeRequest, ResetPasswordRequest, VerifyAccountRequest, VerifyCodeRequest,
};
use crate::utils::response::{ApiResponse, validation_failure};
use crate::utils::{otp, password};

type CodeRow = (i64, bool, DateTime<Utc>);

async fn find_code(
    db: &MySqlPool,
    email: &str,
    code: &str,
    purpose: &str,
) -> Result<Option<CodeRow>, sqlx::Error> {
    sqlx::query_as::<_, CodeRow>(
        "SELECT id, verified, expires_at FROM verification_codes \
         WHERE email = ? AND code = ? AND purpose = ? \
         ORDER BY id DESC LIMIT 1",
    )
    .bind(email)
    .bind(code)
    .bind(purpose)
    .fetch_optional(db)
    .await
}

/// POST /api/verify-account - step two of the signup wizard.
pub async fn verify_account(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<VerifyAccountRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    if !otp::is_valid_format(&payload.code) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error("Verification code must be 6 digits")),
        );
    }

    let row = match find_code(&db, &payload.email, &payload.code, "account").await {
        Ok(row) => row,
        Err(e) => {
            eprintln!("Database Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };

    let (_, _, expires_at) = match row {
        Some(row) => row,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Invalid verification code.")),
            );
        }
    };

    if otp::is_expired(expires_at) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error(
                "Verification code has expired. Please register again to receive a new one.",
            )),
        );
    }

    let updated = sqlx::query("UPDATE users SET is_verified = 1 WHERE email = ?")
        .bind(&payload.email)
        .execute(&db)
        .await;

    if let Err(e) = updated {
        eprintln!("Database Error: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to verify account")),
        );
    }

    // consumed codes are gone for good
    let _ = sqlx::query("DELETE FROM verification_codes WHERE email = ? AND purpose = 'account'")
        .bind(&payload.email)
        .execute(&db)
        .await;

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "Account verified successfully! You can now log in.",
            json!(null),
        )),
    )
}

/// POST /api/password-reset/request-code - step one of the reset wizard.
/// Re-requesting discards any in-progress code for the email.
pub async fn request_reset_code(
    Extension(db): Extension<MySqlPool>,
    Extension(config): Extension<Arc<AppConfig>>,
    Json(payload): Json<RequestCodeRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let user = sqlx::query_scalar::<_, i64>("SELECT id FROM users WHERE email = ?")
        .bind(&payload.email)
        .fetch_optional(&db)
        .await;

    match user {
        Ok(Some(_)) => {}
        Ok(None) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ApiResponse::error("No account found with that email.")),
            );
        }
        Err(e) => {
            eprintln!("Database Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    }

    let _ = sqlx::query(
        "DELETE FROM verification_codes WHERE email = ? AND purpose = 'password_reset'",
    )
    .bind(&payload.email)
    .execute(&db)
    .await;

    let code = otp::generate_code();
    let expires_at = otp::expiry_from_now(config.otp_expiry_minutes);

    let stored = sqlx::query(
        "INSERT INTO verification_codes (email, code, purpose, verified, expires_at) \
         VALUES (?, ?, 'password_reset', 0, ?)",
    )
    .bind(&payload.email)
    .bind(&code)
    .bind(expires_at)
    .execute(&db)
    .await;

    if let Err(e) = stored {
        eprintln!("Failed to store reset code: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to issue reset code")),
        );
    }

    println!("Password reset code for {}: {}", payload.email, code);

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "A reset code has been sent to your email.",
            json!(null),
        )),
    )
}

/// POST /api/password-reset/verify-code - step two. Marks the code verified
/// so the final step can require it.
pub async fn verify_reset_code(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<VerifyCodeRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    if !otp::is_valid_format(&payload.code) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse::error("Reset code must be 6 digits")),
        );
    }

    let row = match find_code(&db, &payload.email, &payload.code, "password_reset").await {
        Ok(row) => row,
        Err(e) => {
            eprintln!("Database Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };

    let (code_id, _, expires_at) = match row {
        Some(row) => row,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Invalid or expired code.")),
            );
        }
    };

    if otp::is_expired(expires_at) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Invalid or expired code.")),
        );
    }

    let updated = sqlx::query("UPDATE verification_codes SET verified = 1 WHERE id = ?")
        .bind(code_id)
        .execute(&db)
        .await;

    if let Err(e) = updated {
        eprintln!("Database Error: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to verify code")),
        );
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(
            "Code verified. You may now set a new password.",
            json!(null),
        )),
    )
}

/// POST /api/password-reset/reset - final step, reachable only with a code
/// that passed the verify step for the same email.
pub async fn reset_password(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<ResetPasswordRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let strength = password::strength_errors(&payload.new_password);
    if !strength.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ApiResponse {
                status: false,
                message: "Validation failed".to_string(),
                data: Some(json!({ "newPassword": strength })),
            }),
        );
    }

    let row = match find_code(&db, &payload.email, &payload.code, "password_reset").await {
        Ok(row) => row,
        Err(e) => {
            eprintln!("Database Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };

    let (_, verified, expires_at) = match row {
        Some(row) => row,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::error("Invalid or expired code.")),
            );
        }
    };

    if !verified {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error("Verify the reset code first.")),
        );
    }

    if otp::is_expired(expires_at) {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::error("Invalid or expired code.")),
        );
    }

    let hashed = match password::hash_password(&payload.new_password) {
        Ok(hashed) => hashed,
        Err(response) => return (StatusCode::INTERNAL_SERVER_ERROR, response),
    };

    let updated = sqlx::query("UPDATE users SET password = ? WHERE email = ?")
        .bind(&hashed)
        .bind(&payload.email)
        .execute(&db)
        .await;

    if let Err(e) = updated {
        eprintln!("Database Error: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error("Failed to reset password")),
        );
    }

    let _ = sqlx::query(
        "DELETE FROM verification_codes WHERE email = ? AND purpose = 'password_reset'",
    )
    .bind(&payload.email)
    .execute(&db)
    .await;

    (
        StatusCode::OK,
        Json(ApiResponse::success("Password reset successful.", json!(null))),
    )
}
