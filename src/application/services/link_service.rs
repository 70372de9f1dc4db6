//! Link lifecycle service: creation, resolution, click recording, stats,
//! and deletion.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::domain::clock::Clock;
use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRepository, DEFAULT_RECENT_LIMIT, LinkRepository};
use crate::error::AppError;
use crate::utils::CodeGenerator;
use crate::utils::validate_target_url;

/// Result of a create call.
///
/// `already_existed` is true when an existing link for the same target URL
/// was returned instead of creating a new one.
#[derive(Debug, Clone)]
pub struct CreateOutcome {
    pub link: Link,
    pub already_existed: bool,
}

/// A link bundled with its most recent clicks.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: Link,
    pub recent_clicks: Vec<Click>,
}

/// Service orchestrating the short link lifecycle.
///
/// The only component that calls the code generator and mutates the link
/// store and click log together. All collaborators (store, click log,
/// generator, clock) are injected; there is no hidden global state.
pub struct LinkService {
    links: Arc<dyn LinkRepository>,
    clicks: Arc<dyn ClickRepository>,
    generator: Arc<CodeGenerator>,
    clock: Arc<dyn Clock>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkRepository>,
        clicks: Arc<dyn ClickRepository>,
        generator: Arc<CodeGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            links,
            clicks,
            generator,
            clock,
        }
    }

    /// Creates a short link for a target URL.
    ///
    /// # Deduplication
    ///
    /// Without a custom code, an existing link for the same URL is reused
    /// when the existing link's expiry is absent or strictly in the future.
    /// The new request's `expires_at` does not participate in that decision,
    /// so a caller asking for a short-lived link may receive back a
    /// never-expiring existing one. A custom code always bypasses dedup.
    ///
    /// # Collision handling
    ///
    /// If the insert loses a race on a generated code, generation is retried
    /// exactly once; a second collision surfaces
    /// [`AppError::TransientConflict`]. This retry boundary is separate from
    /// the generator's internal attempt budget.
    ///
    /// # Errors
    ///
    /// [`AppError::InvalidUrl`], [`AppError::InvalidCustomCode`],
    /// [`AppError::CodeInUse`], [`AppError::TransientConflict`],
    /// [`AppError::CapacityExceeded`], or [`AppError::StoreUnavailable`].
    pub async fn create(
        &self,
        target_url: String,
        custom_code: Option<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<CreateOutcome, AppError> {
        validate_target_url(&target_url)?;

        let custom = match custom_code {
            Some(custom) => {
                self.generator.validate_custom_code(&custom)?;

                if self.links.find_by_code(&custom).await?.is_some() {
                    return Err(AppError::CodeInUse(custom));
                }

                Some(custom)
            }
            None => {
                if let Some(existing) = self.links.find_by_target_url(&target_url).await? {
                    // Reuse requires the existing link's expiry to be
                    // strictly in the future; the new request's expires_at
                    // is ignored. Stricter than resolve, which still serves
                    // a link at its exact expiry instant.
                    let now = self.clock.now();
                    if existing.expires_at.is_none_or(|e| e > now) {
                        return Ok(CreateOutcome {
                            link: existing,
                            already_existed: true,
                        });
                    }
                }

                None
            }
        };

        let is_custom = custom.is_some();
        let code = match custom {
            Some(code) => code,
            None => self.generator.generate(self.links.as_ref()).await?,
        };

        let new_link = NewLink {
            code,
            target_url,
            is_custom,
            created_at: self.clock.now(),
            expires_at,
        };

        match self.links.insert(new_link.clone()).await {
            Ok(link) => Ok(CreateOutcome {
                link,
                already_existed: false,
            }),
            Err(AppError::DuplicateCode(code)) => {
                if is_custom {
                    // Another creation claimed the custom code between the
                    // availability check and the insert.
                    return Err(AppError::CodeInUse(code));
                }

                debug!(code, "generated code lost an insert race, retrying once");
                self.retry_insert(new_link).await
            }
            Err(e) => Err(e),
        }
    }

    /// Single retry after a generated code collided at insert time.
    async fn retry_insert(&self, mut new_link: NewLink) -> Result<CreateOutcome, AppError> {
        new_link.code = self.generator.generate(self.links.as_ref()).await?;

        match self.links.insert(new_link).await {
            Ok(link) => Ok(CreateOutcome {
                link,
                already_existed: false,
            }),
            Err(AppError::DuplicateCode(_)) => Err(AppError::TransientConflict),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its link for redirecting.
    ///
    /// Side-effect free; recording the visit is a separate step
    /// ([`Self::record_click`]).
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] if the code is unknown, [`AppError::Expired`]
    /// if the link's expiry time is in the past.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        if link.is_expired(self.clock.now()) {
            return Err(AppError::Expired);
        }

        Ok(link)
    }

    /// Records a click after a successful resolution.
    ///
    /// Increments the click counter and appends a click event. Never fails
    /// observably: a redirect that already happened must not be reported as
    /// failed because analytics could not be written. Faults, including a
    /// link deleted between resolve and record, are logged and swallowed.
    pub async fn record_click(
        &self,
        code: &str,
        ip: Option<String>,
        user_agent: Option<String>,
        referer: Option<String>,
    ) {
        let link_id = match self.links.increment_clicks(code).await {
            Ok(Some(link_id)) => link_id,
            Ok(None) => {
                debug!(code, "link vanished before its click was recorded");
                return;
            }
            Err(e) => {
                warn!(code, error = %e, "failed to increment click counter");
                return;
            }
        };

        let new_click = NewClick {
            link_id,
            occurred_at: self.clock.now(),
            ip,
            user_agent,
            referer,
        };

        if let Err(e) = self.clicks.append(new_click).await {
            warn!(code, link_id, error = %e, "failed to append click event");
        }
    }

    /// Returns a link and its most recent clicks (at most 10, newest first).
    ///
    /// Expired links still return stats; stats access is not gated by expiry.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] if the code is unknown.
    pub async fn stats(&self, code: &str) -> Result<LinkStats, AppError> {
        let link = self
            .links
            .find_by_code(code)
            .await?
            .ok_or(AppError::NotFound)?;

        let recent_clicks = self.clicks.recent(link.id, DEFAULT_RECENT_LIMIT).await?;

        Ok(LinkStats {
            link,
            recent_clicks,
        })
    }

    /// Hard-deletes a link and all its click events.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] if the code is unknown (including a concurrent
    /// delete winning the race).
    pub async fn delete(&self, code: &str) -> Result<(), AppError> {
        if self.links.find_by_code(code).await?.is_none() {
            return Err(AppError::NotFound);
        }

        if !self.links.delete(code).await? {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
