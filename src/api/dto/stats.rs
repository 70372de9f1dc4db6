//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Click;

use super::link::LinkInfo;

/// Statistics for a short link: metadata, lifetime total, recent clicks.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub link: LinkInfo,
    pub total_clicks: i64,
    pub recent_clicks: Vec<ClickInfo>,
}

/// One recorded click event.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub id: i64,
    pub occurred_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl From<&Click> for ClickInfo {
    fn from(click: &Click) -> Self {
        Self {
            id: click.id,
            occurred_at: click.occurred_at,
            ip: click.ip.clone(),
            user_agent: click.user_agent.clone(),
            referer: click.referer.clone(),
        }
    }
}
