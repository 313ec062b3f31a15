//! Networked cache backend over a bb8 pool of redis connections.

use crate::{CacheError, CacheStore, Result as CacheErrorResult};

use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::{RedisConnectionManager, bb8::Pool, redis};
use log::info;

const CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct RedisCacheStore {
    pool: Pool<RedisConnectionManager>,
}

impl RedisCacheStore {
    /// Build the pool and check the server answers a PING.
    ///
    /// # Errors
    ///
    /// `CacheError::Backend` if the URL is invalid or the server is unreachable.
    pub async fn connect(url: &str, max_connections: u32) -> CacheErrorResult<Self> {
        let manager = RedisConnectionManager::new(url)?;

        let pool = Pool::builder()
            .max_size(max_connections)
            .connection_timeout(CONNECTION_TIMEOUT)
            .build(manager)
            .await
            .map_err(|e| CacheError::backend(format!("Failed to build redis pool: {}", e)))?;

        let store = Self { pool };
        store.ping().await?;
        info!("Redis cache pool ready (max {} connections)", max_connections);

        Ok(store)
    }

    /// Round-trip a PING through the pool
    pub async fn ping(&self) -> CacheErrorResult<()> {
        let mut conn = self.pool.get().await?;
        let _: String = redis::cmd("PING").query_async(&mut *conn).await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    async fn get(&self, key: &str) -> CacheErrorResult<Option<Vec<u8>>> {
        let mut conn = self.pool.get().await?;
        let value: Option<Vec<u8>> = redis::cmd("GET").arg(key).query_async(&mut *conn).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> CacheErrorResult<()> {
        // PX rejects 0
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX).max(1);

        let mut conn = self.pool.get().await?;
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("PX")
            .arg(millis)
            .query_async(&mut *conn)
            .await?;

        Ok(())
    }

    async fn delete(&self, key: &str) -> CacheErrorResult<()> {
        let mut conn = self.pool.get().await?;
        let _: i64 = redis::cmd("DEL").arg(key).query_async(&mut *conn).await?;
        Ok(())
    }
}
