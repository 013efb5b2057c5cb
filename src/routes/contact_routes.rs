use crate::{handlers::contact_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

pub fn contact_routes() -> Router {
    let public = Router::new().route("/api/contact-message", post(contact_handler::store));

    let admin = Router::new()
        .route(
            "/api/admin/contact-messages",
            get(contact_handler::admin_index),
        )
        .route(
            "/api/admin/contact-messages/{id}",
            delete(contact_handler::admin_delete),
        )
        .layer(middleware::from_fn(admin_auth));

    public.merge(admin)
}
