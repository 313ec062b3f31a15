use crate::{
    CacheError, CacheStore, MemoryCacheStore, Result as CacheErrorResult, UserCache, profile_key,
    user_email_key, user_id_key,
};

use acct_core::{Profile, ProfileEdit, User};

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use googletest::prelude::*;

/// Memory store that records every call and fails writes to one key prefix
struct FlakyStore {
    inner: MemoryCacheStore,
    fail_set_prefix: Option<&'static str>,
    fail_get: bool,
    calls: Mutex<Vec<String>>,
}

impl FlakyStore {
    fn new() -> Self {
        Self {
            inner: MemoryCacheStore::new(),
            fail_set_prefix: None,
            fail_get: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn failing_set(prefix: &'static str) -> Self {
        Self {
            fail_set_prefix: Some(prefix),
            ..Self::new()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CacheStore for FlakyStore {
    async fn get(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>> {
        self.calls.lock().unwrap().push(format!("get {key}"));
        if self.fail_get {
            return Err(CacheError::backend("connection reset"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()> {
        self.calls.lock().unwrap().push(format!("set {key}"));
        if let Some(prefix) = self.fail_set_prefix
            && key.starts_with(prefix)
        {
            return Err(CacheError::backend("write refused"));
        }
        self.inner.set(key, value, ttl).await
    }

    async fn delete(&self, key: &str) -> CacheErrorResult<()> {
        self.calls.lock().unwrap().push(format!("delete {key}"));
        self.inner.delete(key).await
    }
}

fn test_user() -> User {
    let mut user = User::new("a@b.com", "$argon2id$hash");
    user.id = 7;
    user
}

fn test_profile() -> Profile {
    let edit = ProfileEdit::parse("ada", "1989-08-21", "hello").unwrap();
    let mut profile = Profile::from_edit(7, &edit);
    profile.id = 3;
    profile
}

#[test]
fn given_identities_when_deriving_keys_then_families_do_not_collide() {
    // Given/When: Keys for the same numeric identity in every family
    let by_id = user_id_key(7);
    let by_email = user_email_key("7");
    let by_profile = profile_key(7);

    // Then: Each family carries its own tag
    assert_that!(by_id.as_str(), eq("acct:user:id:7"));
    assert_that!(by_email.as_str(), eq("acct:user:email:7"));
    assert_that!(by_profile.as_str(), eq("acct:profile:user:7"));
    assert_that!(by_id, not(eq(&by_email)));
    assert_that!(by_id, not(eq(&by_profile)));
}

#[tokio::test]
async fn given_user_when_set_then_same_snapshot_is_readable_by_id_and_email() {
    // Given: A cache over a memory store
    let cache = UserCache::new(Arc::new(MemoryCacheStore::new()));
    let user = test_user();

    // When: Caching the user
    cache.set_user(&user).await.unwrap();

    // Then: Both families return an identical snapshot
    assert_that!(cache.find_user_by_id(7).await, ok(some(eq(&user))));
    assert_that!(cache.find_user_by_email("a@b.com").await, ok(some(eq(&user))));
}

#[tokio::test]
async fn given_empty_cache_when_finding_then_returns_none() {
    // Given: Nothing cached
    let cache = UserCache::new(Arc::new(MemoryCacheStore::new()));

    // When/Then: Every family reports absence, not an error
    assert_that!(cache.find_user_by_id(1).await, ok(none()));
    assert_that!(cache.find_user_by_email("x@y.com").await, ok(none()));
    assert_that!(cache.find_profile_by_user(1).await, ok(none()));
}

#[tokio::test]
async fn given_profile_when_set_then_readable_by_user_id() {
    // Given: A cache and a profile
    let cache = UserCache::new(Arc::new(MemoryCacheStore::new()));
    let profile = test_profile();

    // When: Caching it
    cache.set_profile(&profile).await.unwrap();

    // Then: It is keyed by the owning user
    assert_that!(cache.find_profile_by_user(7).await, ok(some(eq(&profile))));
    assert_that!(cache.find_profile_by_user(3).await, ok(none()));
}

#[tokio::test]
async fn given_by_id_write_fails_when_setting_user_then_by_email_is_not_attempted() {
    // Given: A store that refuses by-id writes
    let store = Arc::new(FlakyStore::failing_set("acct:user:id:"));
    let cache = UserCache::new(store.clone());

    // When: Caching a user
    let result = cache.set_user(&test_user()).await;

    // Then: The error is returned after exactly one write attempt
    assert_that!(result, err(anything()));
    assert_that!(store.calls(), eq(&vec!["set acct:user:id:7".to_string()]));
}

#[tokio::test]
async fn given_by_email_write_fails_when_setting_user_then_by_id_is_rolled_back() {
    // Given: A store that refuses by-email writes
    let store = Arc::new(FlakyStore::failing_set("acct:user:email:"));
    let cache = UserCache::new(store.clone());

    // When: Caching a user
    let result = cache.set_user(&test_user()).await;

    // Then: The error surfaces and neither key holds the snapshot
    assert!(matches!(result, Err(CacheError::Backend { .. })));
    assert_that!(
        store.calls(),
        eq(&vec![
            "set acct:user:id:7".to_string(),
            "set acct:user:email:a@b.com".to_string(),
            "delete acct:user:id:7".to_string(),
        ])
    );
    assert_that!(store.inner.get("acct:user:id:7").await, ok(none()));
}

#[tokio::test]
async fn given_backend_failure_when_finding_then_error_is_not_absence() {
    // Given: A store whose reads fail
    let store = Arc::new(FlakyStore {
        fail_get: true,
        ..FlakyStore::new()
    });
    let cache = UserCache::new(store);

    // When: Reading
    let result = cache.find_user_by_id(7).await;

    // Then: The failure is an error, distinct from Ok(None)
    assert!(matches!(result, Err(CacheError::Backend { .. })));
}

#[tokio::test]
async fn given_corrupt_entry_when_finding_then_returns_serialization_error() {
    // Given: Garbage stored under a user key
    let store = Arc::new(MemoryCacheStore::new());
    store
        .set(&user_id_key(7), b"not json".to_vec(), Duration::from_secs(60))
        .await
        .unwrap();
    let cache = UserCache::new(store);

    // When: Reading it back
    let result = cache.find_user_by_id(7).await;

    // Then: Decoding failure names the key
    assert!(matches!(result, Err(CacheError::Serialization { ref key, .. }) if key == "acct:user:id:7"));
}

#[tokio::test]
async fn given_custom_ttl_when_it_elapses_then_snapshot_expires() {
    // Given: A cache with a short TTL
    let cache = UserCache::with_ttl(
        Arc::new(MemoryCacheStore::new()),
        Duration::from_millis(200),
    );
    cache.set_user(&test_user()).await.unwrap();

    // When: The TTL passes
    tokio::time::sleep(Duration::from_millis(400)).await;

    // Then: Both keys have expired
    assert_that!(cache.find_user_by_id(7).await, ok(none()));
    assert_that!(cache.find_user_by_email("a@b.com").await, ok(none()));
}
