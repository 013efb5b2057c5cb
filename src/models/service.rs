use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

pub const SERVICE_CATEGORIES: [&str; 8] = [
    "Document Request",
    "Health Services",
    "Infrastructure",
    "Social Welfare",
    "Community Support",
    "Emergency Response",
    "Livelihood Programs",
    "Other",
];

pub const AVAILABILITY_OPTIONS: [&str; 6] = [
    "Weekdays (8AM-5PM)",
    "24/7 (Emergency)",
    "By Appointment",
    "Flexible Schedule",
    "Online Only",
    "N/A",
];

pub const DEPARTMENT_OPTIONS: [&str; 6] = [
    "Office of the Captain",
    "Health Center",
    "Secretary's Office",
    "SK Council",
    "Disaster Management",
    "Other",
];

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Service {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub description: Option<String>,
    pub featured_image_url: Option<String>,
    pub contact_person: Option<String>,
    pub contact_number: Option<String>,
    pub availability: String,
    pub department: String,
    /// JSON array of requirement strings.
    pub requirements_list: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Service {
    pub fn requirements(&self) -> Result<Vec<String>, serde_json::Error> {
        match &self.requirements_list {
            Some(raw) if !raw.is_empty() => serde_json::from_str(raw),
            _ => Ok(Vec::new()),
        }
    }
}

impl Searchable for Service {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.category,
            &self.department,
            self.description.as_deref().unwrap_or(""),
        ]
    }
}
