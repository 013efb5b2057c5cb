use serde::{Deserialize, Serialize};

pub const READABLE_CONTENT_TYPES: [&str; 3] = ["announcements", "news", "jobs"];

#[derive(Debug, Serialize, Deserialize)]
pub struct UnreadCountsQuery {
    #[serde(rename = "userId")]
    pub user_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAsReadRequest {
    pub user_id: i64,
    pub content_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UnreadCounts {
    pub announcements: i64,
    pub news: i64,
    pub jobs: i64,
}
