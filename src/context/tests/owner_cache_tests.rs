//! Tests for the lazily populated owner-ID cache.

use async_trait::async_trait;
use mockall::mock;
use rstest::rstest;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::fixtures::{AUTHOR_ID, app_with, guild_cache};
use crate::context::{
    domain::UserId,
    ports::{OwnerDirectory, OwnerDirectoryError, OwnerDirectoryResult},
    services::OwnerIdCache,
};

mock! {
    Owners {}

    #[async_trait]
    impl OwnerDirectory for Owners {
        async fn fetch_owner_ids(&self) -> OwnerDirectoryResult<Vec<UserId>>;
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn owner_ids_are_fetched_once() {
    let mut owners = MockOwners::new();
    owners
        .expect_fetch_owner_ids()
        .times(1)
        .returning(|| Ok(vec![AUTHOR_ID]));
    let cache = OwnerIdCache::new();
    assert!(!cache.is_populated());

    let first = cache
        .get_or_fetch(&owners)
        .await
        .expect("first fetch should succeed")
        .clone();
    let second = cache
        .get_or_fetch(&owners)
        .await
        .expect("cached lookup should succeed");

    assert!(first.contains(&AUTHOR_ID));
    assert_eq!(&first, second);
    assert!(cache.is_populated());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_owner_list_is_cached() {
    let mut owners = MockOwners::new();
    owners
        .expect_fetch_owner_ids()
        .times(1)
        .returning(|| Ok(Vec::new()));
    let cache = OwnerIdCache::new();

    for _ in 0..3 {
        let ids = cache
            .get_or_fetch(&owners)
            .await
            .expect("lookup should succeed");
        assert!(ids.is_empty());
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_fetch_leaves_cache_unpopulated() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut owners = MockOwners::new();
    owners.expect_fetch_owner_ids().times(2).returning(move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(OwnerDirectoryError::unavailable(io::Error::other("offline")))
        } else {
            Ok(vec![AUTHOR_ID])
        }
    });
    let cache = OwnerIdCache::new();

    let failed = cache.get_or_fetch(&owners).await;
    assert!(matches!(failed, Err(OwnerDirectoryError::Unavailable(_))));
    assert!(!cache.is_populated());

    let ids = cache
        .get_or_fetch(&owners)
        .await
        .expect("retry should succeed");
    assert!(ids.contains(&AUTHOR_ID));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn pre_seeded_app_never_queries_directory() {
    let mut owners = MockOwners::new();
    owners.expect_fetch_owner_ids().never();
    let cache = guild_cache();
    let app = Arc::try_unwrap(app_with(&cache, Arc::new(owners)))
        .expect("fresh app has a single owner")
        .with_owner_ids([AUTHOR_ID]);

    assert!(app.owner_id_cache().is_populated());
    let ids = app.owner_ids().await.expect("seeded lookup should succeed");
    assert!(ids.contains(&AUTHOR_ID));
}
