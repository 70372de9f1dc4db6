//! Application services implementing the business logic.

pub mod link_service;

pub use link_service::{CreateOutcome, LinkService, LinkStats};
