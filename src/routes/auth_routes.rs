use crate::handlers::{
    login_handler::login,
    register_handler::register,
    verification_handler::{request_reset_code, reset_password, verify_account, verify_reset_code},
};
use axum::{Router, routing::post};

pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/verify-account", post(verify_account))
        .route("/api/password-reset/request-code", post(request_reset_code))
        .route("/api/password-reset/verify-code", post(verify_reset_code))
        .route("/api/password-reset/reset", post(reset_password))
}
