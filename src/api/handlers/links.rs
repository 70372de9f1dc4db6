//! Handler for link deletion.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Hard-deletes a short link and all its click events.
///
/// # Endpoint
///
/// `DELETE /api/links/{code}`
///
/// Returns 204 No Content on success. The code is freed for reuse only
/// because the row itself is gone.
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.link_service.delete(&code).await?;
    Ok(StatusCode::NO_CONTENT)
}
