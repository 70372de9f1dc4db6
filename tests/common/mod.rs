#![allow(dead_code)]

use std::sync::Arc;

use urlcut::application::services::LinkService;
use urlcut::domain::clock::{Clock, SystemClock};
use urlcut::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemoryStore,
};
use urlcut::state::AppState;
use urlcut::utils::{CodeGenerator, CodePolicy};

/// Memory-backed service graph for tests.
pub struct TestContext {
    pub service: Arc<LinkService>,
    pub links: Arc<MemoryLinkRepository>,
    pub clicks: Arc<MemoryClickRepository>,
}

pub fn context() -> TestContext {
    context_with_clock(Arc::new(SystemClock))
}

pub fn context_with_clock(clock: Arc<dyn Clock>) -> TestContext {
    let store = MemoryStore::new();
    let links = Arc::new(MemoryLinkRepository::new(store.clone()));
    let clicks = Arc::new(MemoryClickRepository::new(store));
    let generator = Arc::new(CodeGenerator::with_seed(CodePolicy::default(), 0xC0DE));

    let service = Arc::new(LinkService::new(
        links.clone(),
        clicks.clone(),
        generator,
        clock,
    ));

    TestContext {
        service,
        links,
        clicks,
    }
}

pub fn state(ctx: &TestContext) -> AppState {
    AppState::new(
        ctx.service.clone(),
        ctx.links.clone(),
        "http://localhost:3000".to_string(),
    )
}
