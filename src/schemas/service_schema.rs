use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::service::{AVAILABILITY_OPTIONS, DEPARTMENT_OPTIONS, SERVICE_CATEGORIES};
use crate::schemas::{deserialize_string_list, validate_phone_number};

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if SERVICE_CATEGORIES.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("category");
    error.message = Some("Unknown service category".into());
    Err(error)
}

fn validate_availability(value: &str) -> Result<(), ValidationError> {
    if AVAILABILITY_OPTIONS.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("availability");
    error.message = Some("Unknown availability option".into());
    Err(error)
}

fn validate_department(value: &str) -> Result<(), ValidationError> {
    if DEPARTMENT_OPTIONS.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("department");
    error.message = Some("Unknown department".into());
    Err(error)
}

fn validate_optional_phone(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    validate_phone_number(value)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServiceRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = validate_category))]
    pub category: String,
    pub description: Option<String>,
    pub featured_image_url: Option<String>,
    pub contact_person: Option<String>,
    #[serde(default)]
    #[validate(custom(function = validate_optional_phone))]
    pub contact_number: String,
    #[validate(custom(function = validate_availability))]
    pub availability: String,
    #[validate(custom(function = validate_department))]
    pub department: String,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub requirements_list: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ServiceRequest {
        ServiceRequest {
            title: "Medical Assistance".to_string(),
            category: "Health Services".to_string(),
            description: Some("Free checkups".to_string()),
            featured_image_url: None,
            contact_person: Some("Nurse Reyes".to_string()),
            contact_number: "09171234567".to_string(),
            availability: "Weekdays (8AM-5PM)".to_string(),
            department: "Health Center".to_string(),
            requirements_list: vec!["Barangay ID".to_string()],
        }
    }

    #[test]
    fn accepts_a_well_formed_service() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn contact_number_is_optional_but_checked_when_present() {
        let mut request = valid_request();
        request.contact_number = "".to_string();
        assert!(request.validate().is_ok());

        request.contact_number = "reach out".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn requirements_accept_stringified_arrays() {
        let request: ServiceRequest = serde_json::from_str(
            r#"{
                "title": "t",
                "category": "Document Request",
                "availability": "N/A",
                "department": "Other",
                "requirements_list": "[\"Valid ID\",\"Proof of residency\"]"
            }"#,
        )
        .unwrap();

        assert_eq!(request.requirements_list.len(), 2);
    }
}
