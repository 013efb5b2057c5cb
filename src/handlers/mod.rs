pub mod admin_handler;
pub mod announcement_handler;
pub mod auth_handler;
pub mod contact_handler;
pub mod document_handler;
pub mod hotline_handler;
pub mod notification_handler;
pub mod profile_handler;
pub mod register_handler;
pub mod service_handler;
pub mod thread_handler;
pub mod upload_handler;

pub use auth_handler::{login_handler, verification_handler};
