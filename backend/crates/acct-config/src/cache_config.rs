use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CACHE_MAX_CONNECTIONS, DEFAULT_CACHE_MEMORY_CAPACITY,
    DEFAULT_CACHE_TTL_SECS,
    DEFAULT_REDIS_URL, MAX_CACHE_MAX_CONNECTIONS, MIN_CACHE_MAX_CONNECTIONS,
};

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    /// Per-process map; entries are lost on restart
    #[default]
    Memory,
    Redis,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "redis" => Ok(Self::Redis),
            other => Err(ConfigError::cache(format!(
                "cache.backend must be 'memory' or 'redis', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CacheBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis_url: String,
    /// Lifetime of cached user and profile snapshots
    pub ttl_secs: u64,
    /// Redis pool size
    pub max_connections: u32,
    /// Entry bound of the in-process backend
    pub memory_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            redis_url: String::from(DEFAULT_REDIS_URL),
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
            max_connections: DEFAULT_CACHE_MAX_CONNECTIONS,
            memory_capacity: DEFAULT_CACHE_MEMORY_CAPACITY,
        }
    }
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.ttl_secs == 0 {
            return Err(ConfigError::cache("cache.ttl_secs must be greater than 0"));
        }

        if self.backend == CacheBackend::Memory && self.memory_capacity == 0 {
            return Err(ConfigError::cache(
                "cache.memory_capacity must be greater than 0",
            ));
        }

        if self.backend == CacheBackend::Redis {
            if !(self.redis_url.starts_with("redis://") || self.redis_url.starts_with("rediss://"))
            {
                return Err(ConfigError::cache(format!(
                    "cache.redis_url must start with redis:// or rediss://, got '{}'",
                    self.redis_url
                )));
            }

            if self.max_connections < MIN_CACHE_MAX_CONNECTIONS
                || self.max_connections > MAX_CACHE_MAX_CONNECTIONS
            {
                return Err(ConfigError::cache(format!(
                    "cache.max_connections must be {}-{}, got {}",
                    MIN_CACHE_MAX_CONNECTIONS, MAX_CACHE_MAX_CONNECTIONS, self.max_connections
                )));
            }
        }

        Ok(())
    }
}
