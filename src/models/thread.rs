use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

pub const JOB_TAG_OPTIONS: [&str; 4] = ["Full-Time", "Part-Time", "Internship", "Contract"];

pub const THREAD_TYPES: [&str; 2] = ["job", "discussion"];

/// A community post: either a job listing or a discussion thread. Jobs carry
/// a tag from `JOB_TAG_OPTIONS` in `post_category`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Thread {
    pub id: i64,
    pub user_id: i64,
    pub post_type: String,
    pub title: String,
    pub post_content: String,
    pub post_category: Option<String>,
    pub contact_number: Option<String>,
    /// JSON array of uploaded media URLs.
    pub media_json: Option<String>,
    pub is_admin_post: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Thread {
    pub fn media_urls(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.media_json {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw),
            _ => Ok(Vec::new()),
        }
    }
}

impl Searchable for Thread {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.post_content,
            self.post_category.as_deref().unwrap_or(""),
        ]
    }
}

/// A response under a thread: a job application or a discussion reply.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ThreadResponse {
    pub id: i64,
    pub thread_id: i64,
    pub user_id: i64,
    pub response_content: String,
    pub created_at: Option<DateTime<Utc>>,
}
