use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, CacheBackend, CacheConfig, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for ACCT_CONFIG_DIR env var, else use ./.acct/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply ACCT_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: ACCT_CONFIG_DIR env var > ./.acct/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.database.validate()?;
        self.cache.validate()?;
        self.auth.validate()?;

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Signing secret bytes; validate() guarantees presence
    pub fn jwt_secret(&self) -> ConfigErrorResult<&[u8]> {
        self.auth
            .jwt_secret
            .as_deref()
            .map(str::as_bytes)
            .ok_or_else(|| ConfigError::auth("auth.jwt_secret is not set"))
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  cors: {}", self.server.cors_origins.join(", "));
        info!("  database: {}", self.database.path);

        match self.cache.backend {
            CacheBackend::Memory => info!(
                "  cache: memory (ttl={}s, capacity {})",
                self.cache.ttl_secs, self.cache.memory_capacity
            ),
            CacheBackend::Redis => info!(
                "  cache: redis (ttl={}s, max {} connections)",
                self.cache.ttl_secs, self.cache.max_connections
            ),
        }

        info!(
            "  auth: HS512 (ttl={}s, renew below {}s, {} public paths)",
            self.auth.token_ttl_secs,
            self.auth.renew_threshold_secs,
            self.auth.public_paths.len()
        );

        info!(
            "  logging: {} (colored: {})",
            *self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("ACCT_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("ACCT_SERVER_PORT", &mut self.server.port);
        Self::apply_env_list("ACCT_SERVER_CORS_ORIGINS", &mut self.server.cors_origins);
        Self::apply_env_parse(
            "ACCT_SERVER_CORS_MAX_AGE_SECS",
            &mut self.server.cors_max_age_secs,
        );

        // Database
        Self::apply_env_string("ACCT_DATABASE_PATH", &mut self.database.path);

        // Cache
        Self::apply_env_parse("ACCT_CACHE_BACKEND", &mut self.cache.backend);
        Self::apply_env_string("ACCT_CACHE_REDIS_URL", &mut self.cache.redis_url);
        Self::apply_env_parse("ACCT_CACHE_TTL_SECS", &mut self.cache.ttl_secs);
        Self::apply_env_parse(
            "ACCT_CACHE_MAX_CONNECTIONS",
            &mut self.cache.max_connections,
        );
        Self::apply_env_parse(
            "ACCT_CACHE_MEMORY_CAPACITY",
            &mut self.cache.memory_capacity,
        );

        // Auth
        Self::apply_env_option_string("ACCT_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("ACCT_AUTH_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);
        Self::apply_env_parse(
            "ACCT_AUTH_RENEW_THRESHOLD_SECS",
            &mut self.auth.renew_threshold_secs,
        );
        Self::apply_env_list("ACCT_AUTH_PUBLIC_PATHS", &mut self.auth.public_paths);

        // Logging
        Self::apply_env_parse("ACCT_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("ACCT_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("ACCT_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("ACCT_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply environment variable override for comma-separated lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
}
