use crate::models::user::User;
use crate::schemas::auth_schema::{LoginRequest, LoginResponse, UserSummary};
use crate::utils::response::{ApiResponse, validation_failure};
use crate::utils::jwt::generate_token;
use axum::{Extension, Json, http::StatusCode};
use bcrypt::verify;
use serde_json::{Value, json};
use sqlx::MySqlPool;
use validator::Validate;

pub async fn login(
    Extension(db): Extension<MySqlPool>,
    Json(payload): Json<LoginRequest>,
) -> (StatusCode, Json<ApiResponse<Value>>) {
    if let Err(errors) = payload.validate() {
        return validation_failure(errors);
    }

    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password, role, is_verified, contact, address, \
         profile_picture_url, created_at, updated_at \
         FROM users WHERE email = ?",
    )
    .bind(&payload.email)
    .fetch_one(&db)
    .await;

    let user = match user {
        Ok(user) => user,
        Err(sqlx::Error::RowNotFound) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Invalid credentials")),
            );
        }
        Err(e) => {
            eprintln!("Database Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    };

    match verify(&payload.password, &user.password) {
        Ok(true) => {}
        Ok(false) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(ApiResponse::error("Invalid credentials")),
            );
        }
        Err(e) => {
            println!("Password Verification Error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Internal server error")),
            );
        }
    }

    if !user.is_verified {
        return (
            StatusCode::FORBIDDEN,
            Json(ApiResponse::error(
                "Account not verified. Check your email for the verification code.",
            )),
        );
    }

    match generate_token(user.id, &user.role) {
        Ok(token) => {
            let response = LoginResponse {
                token,
                user: UserSummary {
                    id: user.id,
                    name: user.name,
                    email: user.email,
                    role: user.role,
                },
            };

            (
                StatusCode::OK,
                Json(ApiResponse::success("Login successful", json!(response))),
            )
        }
        Err(e) => {
            println!("Token Generation Error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error("Failed to generate token")),
            )
        }
    }
}
