//! End-to-end service behavior on the in-memory backend.

mod common;

use chrono::{Duration, Utc};
use std::collections::HashSet;
use urlcut::error::AppError;

#[tokio::test]
async fn test_create_twice_returns_same_code() {
    let ctx = common::context();

    let first = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();
    let second = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();

    assert!(!first.already_existed);
    assert!(second.already_existed);
    assert_eq!(first.link.code, second.link.code);
    assert_eq!(first.link.id, second.link.id);
}

#[tokio::test]
async fn test_generated_codes_are_unique_and_well_formed() {
    let ctx = common::context();
    let mut codes = HashSet::new();

    for i in 0..100 {
        let outcome = ctx
            .service
            .create(format!("https://example.com/page/{i}"), None, None)
            .await
            .unwrap();

        let code = outcome.link.code;
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(codes.insert(code), "code collided across links");
    }
}

#[tokio::test]
async fn test_custom_code_bypasses_dedup() {
    let ctx = common::context();

    let a = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();

    let again = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();
    assert!(again.already_existed);
    assert_eq!(again.link.id, a.link.id);

    let custom = ctx
        .service
        .create(
            "https://example.com/a".to_string(),
            Some("mine".to_string()),
            None,
        )
        .await
        .unwrap();

    assert!(!custom.already_existed);
    assert_ne!(custom.link.id, a.link.id);
    assert_eq!(custom.link.code, "mine");
    assert!(custom.link.is_custom);
}

#[tokio::test]
async fn test_create_accepts_past_expiry_then_resolve_fails() {
    let ctx = common::context();

    // Creation does not validate expires_at against now.
    let outcome = ctx
        .service
        .create(
            "https://x.test".to_string(),
            None,
            Some(Utc::now() - Duration::hours(1)),
        )
        .await
        .unwrap();

    let result = ctx.service.resolve(&outcome.link.code).await;
    assert!(matches!(result, Err(AppError::Expired)));

    // Stats remain available for the expired link.
    let stats = ctx.service.stats(&outcome.link.code).await.unwrap();
    assert_eq!(stats.link.click_count, 0);
}

#[tokio::test]
async fn test_expired_link_still_occupies_its_code() {
    let ctx = common::context();

    ctx.service
        .create(
            "https://x.test".to_string(),
            Some("gone1".to_string()),
            Some(Utc::now() - Duration::hours(1)),
        )
        .await
        .unwrap();

    let result = ctx
        .service
        .create(
            "https://y.test".to_string(),
            Some("gone1".to_string()),
            None,
        )
        .await;

    assert!(matches!(result, Err(AppError::CodeInUse(_))));
}

#[tokio::test]
async fn test_delete_removes_link_and_clicks() {
    let ctx = common::context();

    let outcome = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();
    let code = outcome.link.code.clone();
    let link_id = outcome.link.id;

    ctx.service
        .record_click(&code, Some("10.0.0.1".to_string()), None, None)
        .await;

    ctx.service.delete(&code).await.unwrap();

    assert!(matches!(
        ctx.service.resolve(&code).await,
        Err(AppError::NotFound)
    ));
    assert!(matches!(
        ctx.service.stats(&code).await,
        Err(AppError::NotFound)
    ));

    // No click event referencing the link remains queryable.
    use urlcut::domain::repositories::ClickRepository;
    let remaining = ctx.clicks.recent(link_id, 100).await.unwrap();
    assert!(remaining.is_empty());

    assert!(matches!(
        ctx.service.delete(&code).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_concurrent_clicks_lose_nothing() {
    let ctx = common::context();

    let outcome = ctx
        .service
        .create("https://example.com/hot".to_string(), None, None)
        .await
        .unwrap();
    let code = outcome.link.code.clone();

    let mut handles = Vec::new();
    for i in 0..100 {
        let service = ctx.service.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            service
                .record_click(&code, Some(format!("10.0.0.{i}")), None, None)
                .await;
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let stats = ctx.service.stats(&code).await.unwrap();
    assert_eq!(stats.link.click_count, 100);
    assert_eq!(stats.recent_clicks.len(), 10);

    for pair in stats.recent_clicks.windows(2) {
        assert!(pair[0].occurred_at >= pair[1].occurred_at);
    }
}

#[tokio::test]
async fn test_record_click_after_delete_is_silent() {
    let ctx = common::context();

    let outcome = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();
    let code = outcome.link.code.clone();

    ctx.service.delete(&code).await.unwrap();

    // Must not panic or error: the redirect already happened.
    ctx.service.record_click(&code, None, None, None).await;
}

#[tokio::test]
async fn test_resolve_does_not_count_clicks() {
    let ctx = common::context();

    let outcome = ctx
        .service
        .create("https://example.com/a".to_string(), None, None)
        .await
        .unwrap();

    ctx.service.resolve(&outcome.link.code).await.unwrap();
    ctx.service.resolve(&outcome.link.code).await.unwrap();

    let stats = ctx.service.stats(&outcome.link.code).await.unwrap();
    assert_eq!(stats.link.click_count, 0);
}
