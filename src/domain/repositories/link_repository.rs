//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// The store is the single source of truth for code uniqueness and click
/// counters. Lookups by code are expected to be indexed.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code already exists. The
    /// uniqueness constraint enforced here is authoritative; callers that
    /// pre-checked availability must still handle this error.
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults. A failed
    /// insert leaves no partial link behind.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code. Exact match, used on every redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its target URL.
    ///
    /// When several links share a URL (custom codes bypass dedup), the first
    /// by insertion order is returned. Used only for creation dedup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults.
    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter for a code.
    ///
    /// Concurrent increments on the same code must never lose an update.
    ///
    /// # Returns
    ///
    /// The link's id when the row still exists, `None` when the link vanished
    /// between resolution and recording.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults.
    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError>;

    /// Hard-deletes a link and all its clicks as a single logical unit.
    ///
    /// Returns `true` if the link existed, `false` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults. A failed
    /// delete removes neither the link nor its clicks.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;
}
