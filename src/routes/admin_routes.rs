use crate::{handlers::admin_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get},
};

pub fn admin_routes() -> Router {
    Router::new()
        .route(
            "/api/admin/dashboard-stats",
            get(admin_handler::dashboard_stats),
        )
        .route("/api/admin/users", get(admin_handler::users_index))
        .route("/api/admin/users/{id}", delete(admin_handler::users_delete))
        .layer(middleware::from_fn(admin_auth))
}
