//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, header},
    response::{IntoResponse, Redirect},
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its target URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Resolution and click recording are deliberately decoupled: the redirect
/// is committed as soon as the code resolves, and the click is recorded in a
/// spawned task that never reports failure back to the client. A slow or
/// broken analytics path must not take redirects down with it.
///
/// # Errors
///
/// Returns 404 when the code is unknown and 410 when the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let ip = Some(addr.ip().to_string());
    let user_agent = header_value(&headers, header::USER_AGENT);
    let referer = header_value(&headers, header::REFERER);

    let service = state.link_service.clone();
    tokio::spawn(async move {
        service.record_click(&code, ip, user_agent, referer).await;
    });

    Ok(Redirect::temporary(&link.target_url))
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
