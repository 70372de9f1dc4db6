//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by all link queries.
#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    code: String,
    target_url: String,
    is_custom: bool,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.code,
            row.target_url,
            row.is_custom,
            row.created_at,
            row.expires_at,
            row.click_count,
        )
    }
}

const LINK_COLUMNS: &str = "id, code, target_url, is_custom, created_at, expires_at, click_count";

/// PostgreSQL repository for link storage and retrieval.
///
/// Code uniqueness is enforced by the `links_code_key` unique index; the
/// generator's pre-check only reduces how often an insert bounces off it.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let query = format!(
            "INSERT INTO links (code, target_url, is_custom, created_at, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(&new_link.code)
            .bind(&new_link.target_url)
            .bind(new_link.is_custom)
            .bind(new_link.created_at)
            .bind(new_link.expires_at)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| match e.as_database_error() {
                Some(db) if db.is_unique_violation() => AppError::DuplicateCode(new_link.code),
                _ => AppError::from(e),
            })?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let query = format!("SELECT {LINK_COLUMNS} FROM links WHERE code = $1");

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError> {
        // First match by insertion order when several links share a URL.
        let query = format!(
            "SELECT {LINK_COLUMNS} FROM links WHERE target_url = $1 ORDER BY id ASC LIMIT 1"
        );

        let row = sqlx::query_as::<_, LinkRow>(&query)
            .bind(target_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        // Single-statement read-modify-write; row locking makes concurrent
        // increments on the same code lose nothing.
        let id = sqlx::query_scalar::<_, i64>(
            "UPDATE links SET click_count = click_count + 1 WHERE code = $1 RETURNING id",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        // Explicit two-step transactional delete instead of an engine
        // cascade, so the contract holds on any backend.
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i64>("SELECT id FROM links WHERE code = $1 FOR UPDATE")
            .bind(code)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(id) = id else {
            return Ok(false);
        };

        sqlx::query("DELETE FROM clicks WHERE link_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM links WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(true)
    }
}
