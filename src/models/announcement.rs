use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

pub const ANNOUNCEMENT_CATEGORIES: [&str; 7] = [
    "General Information",
    "Closure Notice",
    "Service Interruption",
    "Urgent Call to Action",
    "Office Hours Update",
    "Upcoming Event",
    "Official Statement",
];

pub const POSTED_BY_OPTIONS: [&str; 5] = [
    "Barangay Captain",
    "Barangay Secretary",
    "SK Chairperson",
    "Office Staff",
    "Other",
];

pub const TARGET_AUDIENCE_OPTIONS: [&str; 7] = [
    "Whole Barangay",
    "Purok / Zone",
    "Senior Citizens",
    "Youth",
    "Business Owners",
    "General Public",
    "N/A",
];

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub content: String,
    pub featured_image_url: Option<String>,
    /// JSON array of attachment URLs; parse failures are surfaced, never
    /// collapsed into an empty list.
    pub attachments_json: Option<String>,
    pub valid_until: Option<NaiveDate>,
    pub posted_by: String,
    pub target_audience: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Announcement {
    pub fn attachments(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.attachments_json {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw),
            _ => Ok(Vec::new()),
        }
    }
}

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.category, &self.content]
    }
}
