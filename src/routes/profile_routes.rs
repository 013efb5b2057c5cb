use crate::{handlers::profile_handler, middlewares::auth_middleware::auth};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn profile_routes() -> Router {
    Router::new()
        .route("/api/profile/{id}", get(profile_handler::show))
        .route("/api/profile/{id}", post(profile_handler::update))
        .route(
            "/api/profile/upload-picture/{id}",
            post(profile_handler::upload_picture),
        )
        .layer(middleware::from_fn(auth))
}
