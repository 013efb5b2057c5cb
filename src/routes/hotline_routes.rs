use crate::{handlers::hotline_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

pub fn hotline_routes() -> Router {
    let public = Router::new().route("/api/hotlines", get(hotline_handler::index));

    let admin = Router::new()
        .route("/api/hotlines", post(hotline_handler::store))
        .route("/api/hotlines/{id}", put(hotline_handler::update))
        .route("/api/hotlines/{id}", delete(hotline_handler::delete))
        .layer(middleware::from_fn(admin_auth));

    public.merge(admin)
}
