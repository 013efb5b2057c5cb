pub mod login_handler;
pub mod verification_handler;
