//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkRepository;

/// Handler-visible application state.
///
/// Holds the link service plus a direct repository handle for the health
/// probe, and the public base URL used to render short links.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub links: Arc<dyn LinkRepository>,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService>,
        links: Arc<dyn LinkRepository>,
        base_url: String,
    ) -> Self {
        Self {
            link_service,
            links,
            base_url,
        }
    }
}
