use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

pub const HOTLINE_CATEGORIES: [&str; 7] = [
    "Emergency (Police/Fire/Medical)",
    "Barangay Office",
    "Health Services",
    "Disaster Management",
    "Social Welfare",
    "General Inquiry",
    "Other",
];

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Hotline {
    pub id: i64,
    pub title: String,
    pub hotline_number: String,
    pub description: Option<String>,
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Searchable for Hotline {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.title,
            &self.hotline_number,
            &self.category,
            self.description.as_deref().unwrap_or(""),
        ]
    }
}
