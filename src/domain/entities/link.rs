//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link with metadata.
///
/// Maps a globally unique short code to a target URL. `target_url`, `code`,
/// `is_custom`, and `created_at` are immutable once created; only
/// `click_count` changes over the link's lifetime.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    /// True when the code was supplied by the requester rather than generated.
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    /// Absent means the link never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// Incremented exactly once per successful resolution.
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        is_custom: bool,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            is_custom,
            created_at,
            expires_at,
            click_count,
        }
    }

    /// Returns true if the link's expiry time is strictly before `now`.
    ///
    /// Expiry is evaluated lazily against the caller's instant; an expired
    /// link still occupies its code slot until explicitly deleted.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| e < now)
    }
}

/// Input data for creating a new link.
///
/// `id` and `click_count` are assigned by the store; `created_at` comes from
/// the service's injected clock so creation time is deterministic in tests.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub target_url: String,
    pub is_custom: bool,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
}
