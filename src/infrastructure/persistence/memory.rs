//! In-process implementation of the link store and click log.
//!
//! Backs the integration tests and small single-node deployments. Both
//! repositories share one [`MemoryStore`] so the cascade delete removes the
//! link and its clicks under a single write lock, mirroring the transaction
//! the PostgreSQL backend uses.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::entities::{Click, Link, NewClick, NewLink};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: HashMap<String, Link>,
    clicks: HashMap<i64, Vec<Click>>,
    next_link_id: i64,
    next_click_id: i64,
}

/// Shared in-memory state behind both repository handles.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

/// In-memory link repository sharing a [`MemoryStore`].
pub struct MemoryLinkRepository {
    store: Arc<MemoryStore>,
}

impl MemoryLinkRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.store.write();

        if inner.links.contains_key(&new_link.code) {
            return Err(AppError::DuplicateCode(new_link.code));
        }

        inner.next_link_id += 1;
        let link = Link::new(
            inner.next_link_id,
            new_link.code.clone(),
            new_link.target_url,
            new_link.is_custom,
            new_link.created_at,
            new_link.expires_at,
            0,
        );

        inner.links.insert(new_link.code, link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.store.read().links.get(code).cloned())
    }

    async fn find_by_target_url(&self, target_url: &str) -> Result<Option<Link>, AppError> {
        // Smallest id wins: ids are assigned in insertion order.
        Ok(self
            .store
            .read()
            .links
            .values()
            .filter(|link| link.target_url == target_url)
            .min_by_key(|link| link.id)
            .cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<Option<i64>, AppError> {
        let mut inner = self.store.write();

        Ok(inner.links.get_mut(code).map(|link| {
            link.click_count += 1;
            link.id
        }))
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.store.write();

        match inner.links.remove(code) {
            Some(link) => {
                inner.clicks.remove(&link.id);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// In-memory click log sharing a [`MemoryStore`].
pub struct MemoryClickRepository {
    store: Arc<MemoryStore>,
}

impl MemoryClickRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn append(&self, new_click: NewClick) -> Result<Click, AppError> {
        let mut inner = self.store.write();

        // Same referential failure the FK raises in PostgreSQL.
        if !inner.links.values().any(|link| link.id == new_click.link_id) {
            return Err(AppError::StoreUnavailable(format!(
                "no link with id {}",
                new_click.link_id
            )));
        }

        inner.next_click_id += 1;
        let click = Click::new(
            inner.next_click_id,
            new_click.link_id,
            new_click.occurred_at,
            new_click.ip,
            new_click.user_agent,
            new_click.referer,
        );

        inner
            .clicks
            .entry(new_click.link_id)
            .or_default()
            .push(click.clone());

        Ok(click)
    }

    async fn recent(&self, link_id: i64, limit: i64) -> Result<Vec<Click>, AppError> {
        let inner = self.store.read();

        let mut clicks = inner.clicks.get(&link_id).cloned().unwrap_or_default();
        clicks.sort_by(|a, b| (b.occurred_at, b.id).cmp(&(a.occurred_at, a.id)));
        clicks.truncate(limit.max(0) as usize);

        Ok(clicks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            target_url: url.to_string(),
            is_custom: false,
            created_at: Utc::now(),
            expires_at: None,
        }
    }

    fn repos() -> (MemoryLinkRepository, MemoryClickRepository) {
        let store = MemoryStore::new();
        (
            MemoryLinkRepository::new(store.clone()),
            MemoryClickRepository::new(store),
        )
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let (links, _) = repos();

        let a = links.insert(new_link("aaa", "https://a.test")).await.unwrap();
        let b = links.insert(new_link("bbb", "https://b.test")).await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(a.click_count, 0);
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_rejected() {
        let (links, _) = repos();

        links.insert(new_link("aaa", "https://a.test")).await.unwrap();
        let result = links.insert(new_link("aaa", "https://b.test")).await;

        assert!(matches!(result, Err(AppError::DuplicateCode(c)) if c == "aaa"));
    }

    #[tokio::test]
    async fn test_find_by_target_url_returns_first_inserted() {
        let (links, _) = repos();

        let first = links
            .insert(new_link("first1", "https://same.test"))
            .await
            .unwrap();
        links
            .insert(new_link("second", "https://same.test"))
            .await
            .unwrap();

        let found = links
            .find_by_target_url("https://same.test")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.id, first.id);
    }

    #[tokio::test]
    async fn test_increment_clicks_counts_and_reports_id() {
        let (links, _) = repos();

        let link = links.insert(new_link("aaa", "https://a.test")).await.unwrap();

        assert_eq!(links.increment_clicks("aaa").await.unwrap(), Some(link.id));
        assert_eq!(links.increment_clicks("aaa").await.unwrap(), Some(link.id));

        let stored = links.find_by_code("aaa").await.unwrap().unwrap();
        assert_eq!(stored.click_count, 2);
    }

    #[tokio::test]
    async fn test_increment_clicks_on_missing_code() {
        let (links, _) = repos();
        assert_eq!(links.increment_clicks("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_cascades_clicks() {
        let (links, clicks) = repos();

        let link = links.insert(new_link("aaa", "https://a.test")).await.unwrap();
        clicks
            .append(NewClick {
                link_id: link.id,
                occurred_at: Utc::now(),
                ip: None,
                user_agent: None,
                referer: None,
            })
            .await
            .unwrap();

        assert!(links.delete("aaa").await.unwrap());
        assert!(links.find_by_code("aaa").await.unwrap().is_none());
        assert!(clicks.recent(link.id, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let (links, _) = repos();
        assert!(!links.delete("nope").await.unwrap());
    }

    #[tokio::test]
    async fn test_append_rejects_unknown_link() {
        let (_, clicks) = repos();

        let result = clicks
            .append(NewClick {
                link_id: 999,
                occurred_at: Utc::now(),
                ip: None,
                user_agent: None,
                referer: None,
            })
            .await;

        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_recent_orders_newest_first_and_truncates() {
        let (links, clicks) = repos();

        let link = links.insert(new_link("aaa", "https://a.test")).await.unwrap();
        let base = Utc::now();

        for i in 0..15 {
            clicks
                .append(NewClick {
                    link_id: link.id,
                    occurred_at: base + Duration::seconds(i),
                    ip: None,
                    user_agent: None,
                    referer: None,
                })
                .await
                .unwrap();
        }

        let recent = clicks.recent(link.id, 10).await.unwrap();

        assert_eq!(recent.len(), 10);
        assert_eq!(recent[0].occurred_at, base + Duration::seconds(14));
        for pair in recent.windows(2) {
            assert!(pair[0].occurred_at >= pair[1].occurred_at);
        }
    }
}
