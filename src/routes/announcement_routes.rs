use crate::{handlers::announcement_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn announcement_routes() -> Router {
    let public = Router::new()
        .route("/api/announcements", get(announcement_handler::public_index))
        .route("/api/news", get(announcement_handler::news));

    let admin = Router::new()
        .route(
            "/api/admin/announcements",
            get(announcement_handler::admin_index),
        )
        .route("/api/admin/announcements", post(announcement_handler::store))
        .route(
            "/api/admin/announcements/{id}",
            put(announcement_handler::update),
        )
        .route(
            "/api/admin/announcements/{id}",
            delete(announcement_handler::delete),
        )
        .layer(middleware::from_fn(admin_auth));

    public.merge(admin)
}
