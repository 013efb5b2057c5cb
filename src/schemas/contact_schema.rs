use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ContactMessageRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    pub subject: Option<String>,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_body_is_required() {
        let valid = ContactMessageRequest {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            subject: None,
            message: "Streetlight out on Purok 2".to_string(),
        };
        assert!(valid.validate().is_ok());

        let empty = ContactMessageRequest {
            message: "".to_string(),
            ..valid
        };
        assert!(empty.validate().is_err());
    }
}
