use crate::{handlers::service_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn service_routes() -> Router {
    let public = Router::new().route("/api/services", get(service_handler::index));

    let admin = Router::new()
        .route("/api/admin/services", get(service_handler::index))
        .route("/api/admin/services", post(service_handler::store))
        .route("/api/admin/services/{id}", put(service_handler::update))
        .route("/api/admin/services/{id}", delete(service_handler::delete))
        .route(
            "/api/admin/services/upload-image",
            post(service_handler::upload_image),
        )
        .layer(middleware::from_fn(admin_auth));

    public.merge(admin)
}
