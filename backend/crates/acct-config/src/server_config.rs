use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CORS_MAX_AGE_SECS, DEFAULT_CORS_ORIGINS, DEFAULT_HOST,
    DEFAULT_PORT, MIN_PORT,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `scheme://host` entries; each also matches with any `:port` appended
    pub cors_origins: Vec<String>,
    pub cors_max_age_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            cors_origins: DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect(),
            cors_max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        // Port 0 means "auto-assign" - OS picks an available port.
        // Any other port must be >= MIN_PORT (1024).
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        for origin in &self.cors_origins {
            let scheme_ok = origin.starts_with("http://") || origin.starts_with("https://");
            if !scheme_ok || origin.ends_with('/') {
                return Err(ConfigError::server(format!(
                    "server.cors_origins entries must look like scheme://host, got '{}'",
                    origin
                )));
            }
        }

        Ok(())
    }

    /// Whether a browser `Origin` header value is on the allow-list
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_origins
            .iter()
            .any(|allowed| match origin.strip_prefix(allowed.as_str()) {
                Some(rest) => rest.is_empty() || rest.starts_with(':'),
                None => false,
            })
    }

    pub fn cors_max_age(&self) -> Duration {
        Duration::from_secs(self.cors_max_age_secs)
    }
}
