//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A click event recorded when a shortened link is resolved.
///
/// The metadata fields are captured verbatim from the request and never
/// validated or interpreted. Click rows are append-only; they are removed
/// only by the owning link's cascade delete.
#[derive(Debug, Clone)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub occurred_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl Click {
    /// Creates a new Click instance.
    pub fn new(
        id: i64,
        link_id: i64,
        occurred_at: DateTime<Utc>,
        ip: Option<String>,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Self {
        Self {
            id,
            link_id,
            occurred_at,
            ip,
            user_agent,
            referer,
        }
    }
}

/// Input data for recording a new click event.
///
/// `link_id` must reference an existing link; `occurred_at` comes from the
/// service's injected clock.
#[derive(Debug, Clone)]
pub struct NewClick {
    pub link_id: i64,
    pub occurred_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_creation_with_all_fields() {
        let now = Utc::now();
        let click = Click::new(
            1,
            42,
            now,
            Some("192.168.1.1".to_string()),
            Some("Mozilla/5.0".to_string()),
            Some("https://google.com".to_string()),
        );

        assert_eq!(click.id, 1);
        assert_eq!(click.link_id, 42);
        assert_eq!(click.occurred_at, now);
        assert_eq!(click.ip, Some("192.168.1.1".to_string()));
        assert_eq!(click.user_agent, Some("Mozilla/5.0".to_string()));
        assert_eq!(click.referer, Some("https://google.com".to_string()));
    }

    #[test]
    fn test_click_creation_minimal() {
        let click = Click::new(1, 10, Utc::now(), None, None, None);

        assert_eq!(click.link_id, 10);
        assert!(click.ip.is_none());
        assert!(click.user_agent.is_none());
        assert!(click.referer.is_none());
    }

    #[test]
    fn test_new_click_creation() {
        let new_click = NewClick {
            link_id: 99,
            occurred_at: Utc::now(),
            ip: Some("10.0.0.1".to_string()),
            user_agent: Some("Chrome/120".to_string()),
            referer: None,
        };

        assert_eq!(new_click.link_id, 99);
        assert!(new_click.ip.is_some());
        assert!(new_click.referer.is_none());
    }
}
