use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::schemas::validate_phone_number;

fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_phone_number(value)
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub name: String,
    pub email: String,
    pub contact: Option<String>,
    pub address: Option<String>,
    #[serde(rename = "profilePictureUrl")]
    pub profile_picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileUpdateRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    #[validate(custom(function = validate_optional_phone))]
    pub contact: String,
    #[serde(default)]
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_is_optional_but_format_checked() {
        let mut request = ProfileUpdateRequest {
            name: "Juan".to_string(),
            contact: "".to_string(),
            address: "Purok 3".to_string(),
        };
        assert!(request.validate().is_ok());

        request.contact = "09171234567".to_string();
        assert!(request.validate().is_ok());

        request.contact = "text me".to_string();
        assert!(request.validate().is_err());
    }
}
