//! TTL key/value cache and the user lookup cache built on top of it.
//!
//! The [`CacheStore`] contract is identical for the in-process and the
//! redis backend: absence is `Ok(None)`, every other failure is a
//! [`CacheError`].

pub mod error;
pub mod store;
pub mod user_cache;

pub use error::{CacheError, Result};
pub use store::cache_store::CacheStore;
pub use store::memory_store::MemoryCacheStore;
pub use store::redis_store::RedisCacheStore;
pub use user_cache::{UserCache, profile_key, user_email_key, user_id_key};

use std::time::Duration;

/// Lifetime of a cached user or profile snapshot
pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

/// Entry bound of the in-process backend
pub const DEFAULT_MEMORY_CAPACITY: u64 = 100_000;

#[cfg(test)]
mod tests;
