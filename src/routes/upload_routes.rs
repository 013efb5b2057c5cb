use crate::{handlers::upload_handler, middlewares::auth_middleware::auth};
use axum::{Router, middleware, routing::post};

pub fn upload_routes() -> Router {
    Router::new()
        .route("/api/upload-media", post(upload_handler::upload_media))
        .layer(middleware::from_fn(auth))
}
