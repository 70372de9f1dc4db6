//! Shared link representation returned by multiple endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// Serializable view of a link, including its full short URL.
#[derive(Debug, Serialize)]
pub struct LinkInfo {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub short_url: String,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl LinkInfo {
    /// Builds the view, prefixing the code with the service base URL.
    pub fn from_link(link: &Link, base_url: &str) -> Self {
        Self {
            id: link.id,
            code: link.code.clone(),
            target_url: link.target_url.clone(),
            short_url: format!("{}/{}", base_url.trim_end_matches('/'), link.code),
            is_custom: link.is_custom,
            created_at: link.created_at,
            expires_at: link.expires_at,
            click_count: link.click_count,
        }
    }
}
