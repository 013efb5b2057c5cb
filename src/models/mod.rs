pub mod announcement;
pub mod contact_message;
pub mod document;
pub mod hotline;
pub mod service;
pub mod thread;
pub mod user;
