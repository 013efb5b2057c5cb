use crate::{handlers::notification_handler, middlewares::auth_middleware::auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn notification_routes() -> Router {
    Router::new()
        .route("/api/unread-counts", get(notification_handler::unread_counts))
        .route("/api/mark-as-read", post(notification_handler::mark_as_read))
        .layer(middleware::from_fn(auth))
}
