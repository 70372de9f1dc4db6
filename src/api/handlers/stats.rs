//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::{ClickInfo, LinkInfo, StatsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Returns statistics for a short link.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Includes the lifetime click total and the 10 most recent clicks, newest
/// first. Expired links still report stats.
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.link_service.stats(&code).await?;

    let body = StatsResponse {
        total_clicks: stats.link.click_count,
        link: LinkInfo::from_link(&stats.link, &state.base_url),
        recent_clicks: stats.recent_clicks.iter().map(ClickInfo::from).collect(),
    };

    Ok(Json(body))
}
