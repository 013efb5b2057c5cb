pub mod admin_routes;
pub mod announcement_routes;
pub mod auth_routes;
pub mod contact_routes;
pub mod document_routes;
pub mod hotline_routes;
pub mod notification_routes;
pub mod profile_routes;
pub mod service_routes;
pub mod thread_routes;
pub mod upload_routes;
