use crate::{handlers::document_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn document_routes() -> Router {
    let citizen = Router::new()
        .route("/api/documents/apply", post(document_handler::apply))
        .route(
            "/api/documents/history/{email}",
            get(document_handler::history),
        )
        .route("/api/documents/cancel/{id}", post(document_handler::cancel))
        .route(
            "/api/documents/remove-from-history/{id}",
            post(document_handler::remove_from_history),
        );

    let admin = Router::new()
        .route("/api/admin/documents", get(document_handler::admin_index))
        .route(
            "/api/admin/documents/update-status/{id}",
            post(document_handler::update_status),
        )
        .route(
            "/api/admin/documents/generate-and-approve/{id}",
            post(document_handler::generate_and_approve),
        )
        .route("/api/admin/documents/export", get(document_handler::export))
        .layer(middleware::from_fn(admin_auth));

    citizen.merge(admin)
}
