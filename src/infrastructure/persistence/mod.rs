//! Storage backends implementing the domain repository traits.

pub mod memory;
pub mod pg_click_repository;
pub mod pg_link_repository;

pub use memory::{MemoryClickRepository, MemoryLinkRepository, MemoryStore};
pub use pg_click_repository::PgClickRepository;
pub use pg_link_repository::PgLinkRepository;
