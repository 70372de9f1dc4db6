//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{code}`            - Short link redirect
//! - `GET    /health`            - Liveness probe including a store round trip
//! - `POST   /api/shorten`       - Create a short link
//! - `GET    /api/stats/{code}`  - Link statistics with recent clicks
//! - `DELETE /api/links/{code}`  - Hard-delete a link and its clicks

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{
    delete_link_handler, health_handler, redirect_handler, shorten_handler, stats_handler,
};
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
        .route("/links/{code}", delete(delete_link_handler))
}
