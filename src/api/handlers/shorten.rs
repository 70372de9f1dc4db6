//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{LinkInfo, ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// Returns 201 Created for a new link and 200 OK when an existing link for
/// the same URL was reused (`already_existed: true` in the body).
///
/// # Errors
///
/// - 400 for an invalid URL or custom code
/// - 409 when the custom code is taken, or a generated-code race exhausted
///   its retry
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let outcome = state
        .link_service
        .create(payload.url, payload.custom_code, payload.expires_at)
        .await?;

    let status = if outcome.already_existed {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    let body = ShortenResponse {
        already_existed: outcome.already_existed,
        link: LinkInfo::from_link(&outcome.link, &state.base_url),
    };

    Ok((status, Json(body)))
}
