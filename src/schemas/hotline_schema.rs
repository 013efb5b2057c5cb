use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::hotline::HOTLINE_CATEGORIES;
use crate::schemas::validate_phone_number;

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if HOTLINE_CATEGORIES.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("category");
    error.message = Some("Unknown hotline category".into());
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HotlineRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = validate_phone_number))]
    pub hotline_number: String,
    pub description: Option<String>,
    #[validate(custom(function = validate_category))]
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> HotlineRequest {
        HotlineRequest {
            title: "Barangay Health Center".to_string(),
            hotline_number: "09171234567".to_string(),
            description: Some("Open weekdays".to_string()),
            category: "Health Services".to_string(),
        }
    }

    #[test]
    fn accepts_a_well_formed_hotline() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn number_format_is_checked() {
        let mut bad = valid_request();
        bad.hotline_number = "call us".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn category_membership_is_checked() {
        let mut bad = valid_request();
        bad.category = "Sports".to_string();
        assert!(bad.validate().is_err());
    }
}
