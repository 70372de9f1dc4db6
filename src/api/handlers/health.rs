//! Health check handler.

use axum::{Json, extract::State, http::StatusCode};
use serde_json::{Value, json};

use crate::state::AppState;

/// Reports service liveness, including a storage round trip.
///
/// # Endpoint
///
/// `GET /health`
///
/// Performs one cheap indexed lookup against the link store; a storage
/// fault turns the response into 503.
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.links.find_by_code("__health__").await {
        Ok(_) => (StatusCode::OK, Json(json!({ "status": "ok" }))),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "degraded", "store": e.to_string() })),
        ),
    }
}
