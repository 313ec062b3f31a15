mod auth_config;
mod cache_config;
mod config;
mod database_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use cache_config::{CacheBackend, CacheConfig};
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

/// Environment variable naming the config directory
pub const CONFIG_DIR_ENV: &str = "ACCT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".acct";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
/// Origins allowed by CORS; a port suffix is accepted on each
const DEFAULT_CORS_ORIGINS: &[&str] = &["http://localhost", "https://webook.gdtengnan.com"];
const DEFAULT_CORS_MAX_AGE_SECS: u64 = 12 * 60 * 60;
const MIN_PORT: u16 = 1024;

const DEFAULT_DATABASE_FILENAME: &str = "acct.db";

const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379/";
const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;
const DEFAULT_CACHE_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_CACHE_MEMORY_CAPACITY: u64 = 100_000;
const MIN_CACHE_MAX_CONNECTIONS: u32 = 1;
const MAX_CACHE_MAX_CONNECTIONS: u32 = 1024;

const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;
const DEFAULT_RENEW_THRESHOLD_SECS: i64 = 30 * 60;
const DEFAULT_PUBLIC_PATHS: &[&str] = &[
    "/users/signup",
    "/users/login",
    "/hello",
    "/health",
    "/live",
    "/ready",
    "/metrics",
];

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
