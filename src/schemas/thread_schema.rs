use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::thread::{JOB_TAG_OPTIONS, THREAD_TYPES};

fn validate_post_type(value: &str) -> Result<(), ValidationError> {
    if THREAD_TYPES.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("post_type");
    error.message = Some("Post type must be 'job' or 'discussion'".into());
    Err(error)
}

fn validate_job_tag(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || JOB_TAG_OPTIONS.contains(&value) {
        return Ok(());
    }
    let mut error = ValidationError::new("post_category");
    error.message = Some("Unknown job tag".into());
    Err(error)
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ThreadStoreRequest {
    pub user_id: i64,
    #[validate(custom(function = validate_post_type))]
    pub post_type: String,
    #[validate(length(min = 1, max = 255, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Post content is required"))]
    pub post_content: String,
    #[serde(default)]
    #[validate(custom(function = validate_job_tag))]
    pub post_category: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub is_admin_post: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStoreRequest {
    pub thread_id: i64,
    pub user_id: i64,
    #[validate(length(min = 1, message = "Response content is required"))]
    pub response_content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JobQuery {
    pub category: Option<String>,
}

/// Moderation summary row: one entry per thread with its response count.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct ContentSummary {
    pub id: i64,
    #[serde(rename = "contentType")]
    pub content_type: String,
    pub title: String,
    #[serde(rename = "postedBy")]
    pub posted_by: String,
    #[serde(rename = "responseCount")]
    pub response_count: i64,
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_request_parses_frontend_payload() {
        let request: ThreadStoreRequest = serde_json::from_str(
            r#"{
                "userId": 1,
                "postType": "job",
                "title": "Store helper needed",
                "postContent": "Weekend shifts",
                "postCategory": "Part-Time",
                "mediaUrls": [],
                "contactNumber": "09171234567",
                "isAdminPost": true
            }"#,
        )
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.post_category, "Part-Time");
        assert!(request.is_admin_post);
    }

    #[test]
    fn post_type_and_tag_are_membership_checked() {
        let mut request = ThreadStoreRequest {
            user_id: 1,
            post_type: "job".to_string(),
            title: "t".to_string(),
            post_content: "c".to_string(),
            post_category: "Full-Time".to_string(),
            media_urls: vec![],
            contact_number: "".to_string(),
            is_admin_post: false,
        };
        assert!(request.validate().is_ok());

        request.post_type = "advert".to_string();
        assert!(request.validate().is_err());

        request.post_type = "job".to_string();
        request.post_category = "Gig".to_string();
        assert!(request.validate().is_err());
    }
}
