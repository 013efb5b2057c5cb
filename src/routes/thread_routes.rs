use crate::{handlers::thread_handler, middlewares::auth_middleware::admin_auth};
use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

pub fn thread_routes() -> Router {
    let public = Router::new()
        .route("/api/threads", post(thread_handler::store))
        .route("/api/jobs", get(thread_handler::jobs))
        .route("/api/job-categories", get(thread_handler::job_categories))
        .route("/api/responses", post(thread_handler::store_response))
        .route(
            "/api/responses/{thread_type}/{thread_id}",
            get(thread_handler::responses_for),
        );

    let admin = Router::new()
        .route("/api/threads/{id}", delete(thread_handler::delete))
        .route("/api/admin/jobs/all", get(thread_handler::admin_jobs))
        .route("/api/admin/content/all", get(thread_handler::content_all))
        .route(
            "/api/admin/content/{thread_type}/responses/{thread_id}",
            get(thread_handler::responses_for),
        )
        .layer(middleware::from_fn(admin_auth));

    public.merge(admin)
}
