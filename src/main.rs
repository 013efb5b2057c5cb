use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
};
use dotenvy::dotenv;
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

mod config;
mod handlers;
mod middlewares;
mod models;
mod routes;
mod schemas;
mod utils;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv().ok();

    let app_config = Arc::new(config::settings::AppConfig::from_env());

    // Connect to database
    let db = config::database::connect().await;

    // Cors Configuration
    let cors = CorsLayer::new()
        .allow_origin(
            app_config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("CORS_ORIGIN must be a valid origin"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let app = Router::new()
        .merge(routes::auth_routes::auth_routes())
        .merge(routes::profile_routes::profile_routes())
        .merge(routes::document_routes::document_routes())
        .merge(routes::announcement_routes::announcement_routes())
        .merge(routes::hotline_routes::hotline_routes())
        .merge(routes::service_routes::service_routes())
        .merge(routes::thread_routes::thread_routes())
        .merge(routes::contact_routes::contact_routes())
        .merge(routes::notification_routes::notification_routes())
        .merge(routes::upload_routes::upload_routes())
        .merge(routes::admin_routes::admin_routes())
        .nest_service("/uploads", ServeDir::new(&app_config.upload_dir))
        .nest_service("/generated", ServeDir::new(&app_config.generated_dir))
        .layer(Extension(db))
        .layer(Extension(app_config.clone()))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], app_config.app_port));

    println!("Server running on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
