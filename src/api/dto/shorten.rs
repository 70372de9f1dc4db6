//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::Serialize;

use super::link::LinkInfo;

/// Request to shorten a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    pub url: String,

    /// Optional custom short code (validated for length and characters).
    pub custom_code: Option<String>,

    /// Optional expiry timestamp. After this time, the link returns 410 Gone.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Response for a shorten request.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    /// True when an existing link for the same URL was returned instead of
    /// creating a new one.
    pub already_existed: bool,
    pub link: LinkInfo,
}
