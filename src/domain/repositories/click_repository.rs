//! Repository trait for the append-only click log.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Default number of clicks returned by [`ClickRepository::recent`].
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Repository interface for click events.
///
/// The log is append-only: rows are never mutated or individually deleted.
/// Removal happens only through the owning link's cascade delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryClickRepository`] - in-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Appends a click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults, including a
    /// `link_id` that no longer references an existing link.
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Returns the most recent clicks for a link, newest first.
    ///
    /// Ordered by `occurred_at` descending and truncated to `limit`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] on storage faults.
    async fn recent(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError>;
}
