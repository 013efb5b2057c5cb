use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::announcement::{
    ANNOUNCEMENT_CATEGORIES, Announcement, POSTED_BY_OPTIONS, TARGET_AUDIENCE_OPTIONS,
};
use crate::schemas::deserialize_string_list;

fn validate_category(value: &str) -> Result<(), ValidationError> {
    if ANNOUNCEMENT_CATEGORIES.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("category");
    error.message = Some("Unknown announcement category".into());
    Err(error)
}

fn validate_posted_by(value: &str) -> Result<(), ValidationError> {
    if POSTED_BY_OPTIONS.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("posted_by");
    error.message = Some("Unknown posting office".into());
    Err(error)
}

fn validate_target_audience(value: &str) -> Result<(), ValidationError> {
    if TARGET_AUDIENCE_OPTIONS.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("target_audience");
    error.message = Some("Unknown target audience".into());
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnnouncementRequest {
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(custom(function = validate_category))]
    pub category: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    pub featured_image_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_string_list")]
    pub attachments_json: Vec<String>,
    pub valid_until: Option<NaiveDate>,
    #[validate(custom(function = validate_posted_by))]
    pub posted_by: String,
    #[validate(custom(function = validate_target_audience))]
    pub target_audience: String,
}

/// Announcement with the attachments column already decoded.
#[derive(Debug, Serialize)]
pub struct AnnouncementResponse {
    #[serde(flatten)]
    pub announcement: Announcement,
    pub attachments: Vec<String>,
}

impl AnnouncementResponse {
    pub fn from_model(
        announcement: Announcement,
    ) -> Result<AnnouncementResponse, serde_json::Error> {
        let attachments = announcement.attachments()?;
        Ok(AnnouncementResponse {
            announcement,
            attachments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> AnnouncementRequest {
        AnnouncementRequest {
            title: "Water Interruption".to_string(),
            category: "Service Interruption".to_string(),
            content: "Expect low pressure on Tuesday.".to_string(),
            featured_image_url: None,
            attachments_json: vec![],
            valid_until: None,
            posted_by: "Barangay Secretary".to_string(),
            target_audience: "Whole Barangay".to_string(),
        }
    }

    #[test]
    fn category_must_come_from_the_fixed_set() {
        assert!(valid_request().validate().is_ok());

        let mut bad = valid_request();
        bad.category = "Breaking News".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn attachments_accept_stringified_arrays() {
        let request: AnnouncementRequest = serde_json::from_str(
            r#"{
                "title": "t",
                "category": "General Information",
                "content": "c",
                "attachments_json": "[\"/uploads/advisory.pdf\"]",
                "posted_by": "Office Staff",
                "target_audience": "General Public"
            }"#,
        )
        .unwrap();

        assert_eq!(request.attachments_json, vec!["/uploads/advisory.pdf"]);
    }
}
