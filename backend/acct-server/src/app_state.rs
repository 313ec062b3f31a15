use crate::error::Result as ServerErrorResult;

use acct_auth::{Argon2Hasher, SessionGate, TokenService};
use acct_cache::{CacheStore, MemoryCacheStore, RedisCacheStore, UserCache};
use acct_config::{CacheBackend, Config, ServerConfig};
use acct_db::SqliteUserStore;
use acct_users::{AccountService, UserRepository};

use std::sync::Arc;

use log::info;
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::SqlitePool;

/// Shared, immutable-after-startup handles for every request
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub tokens: Arc<TokenService>,
    pub gate: Arc<SessionGate>,
    pub pool: SqlitePool,
    /// Listener and CORS settings
    pub server: Arc<ServerConfig>,
    /// `None` when no global recorder was installed (tests)
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Wire the account stack over an open pool and cache backend
    pub fn new(
        config: &Config,
        pool: SqlitePool,
        cache: Arc<dyn CacheStore>,
        metrics: Option<PrometheusHandle>,
    ) -> ServerErrorResult<Self> {
        let tokens = Arc::new(TokenService::new(
            config.jwt_secret()?,
            config.auth.token_ttl_secs,
            config.auth.renew_threshold_secs,
        )?);
        let gate = Arc::new(SessionGate::new(
            tokens.clone(),
            config.auth.public_paths.iter().cloned(),
        ));

        let store = Arc::new(SqliteUserStore::new(pool.clone()));
        let users = Arc::new(UserRepository::new(
            store,
            UserCache::with_ttl(cache, config.cache.ttl()),
        ));
        let accounts = Arc::new(AccountService::new(users, Arc::new(Argon2Hasher::new())));

        Ok(Self {
            accounts,
            tokens,
            gate,
            pool,
            server: Arc::new(config.server.clone()),
            metrics,
        })
    }
}

/// Open the cache backend named in the config
pub async fn connect_cache(config: &Config) -> ServerErrorResult<Arc<dyn CacheStore>> {
    match config.cache.backend {
        CacheBackend::Memory => {
            info!("Cache: in-process, capacity {}", config.cache.memory_capacity);
            Ok(Arc::new(MemoryCacheStore::with_capacity(
                config.cache.memory_capacity,
            )))
        }
        CacheBackend::Redis => {
            info!("Cache: redis");
            let store =
                RedisCacheStore::connect(&config.cache.redis_url, config.cache.max_connections)
                    .await?;
            Ok(Arc::new(store))
        }
    }
}
