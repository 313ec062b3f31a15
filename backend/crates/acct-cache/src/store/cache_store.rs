use crate::Result as CacheErrorResult;

use std::time::Duration;

use async_trait::async_trait;

/// Byte-valued key/value store with per-key expiration.
///
/// Implementations must be safe to share across requests.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// `Ok(None)` when the key was never set, was deleted, or has expired
    async fn get(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>>;

    /// Overwrite `key`; the entry expires `ttl` after this call
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()>;

    /// Remove `key`; deleting an absent key is not an error
    async fn delete(&self, key: &str) -> CacheErrorResult<()>;
}
