use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

use crate::utils::listing::Searchable;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Searchable for ContactMessage {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            &self.name,
            &self.email,
            self.subject.as_deref().unwrap_or(""),
            &self.message,
        ]
    }
}
