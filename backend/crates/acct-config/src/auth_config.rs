use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_PUBLIC_PATHS, DEFAULT_RENEW_THRESHOLD_SECS,
    DEFAULT_TOKEN_TTL_SECS, MIN_JWT_SECRET_LENGTH,
};

use serde::Deserialize;

#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS512 signing secret; required
    pub jwt_secret: Option<String>,
    pub token_ttl_secs: i64,
    /// Tokens with less validity left than this are reissued
    pub renew_threshold_secs: i64,
    /// Paths served without a session token
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            renew_threshold_secs: DEFAULT_RENEW_THRESHOLD_SECS,
            public_paths: DEFAULT_PUBLIC_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

// Hand-written so the secret never reaches a log line
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &self.jwt_secret.as_ref().map(|_| "<redacted>"))
            .field("token_ttl_secs", &self.token_ttl_secs)
            .field("renew_threshold_secs", &self.renew_threshold_secs)
            .field("public_paths", &self.public_paths)
            .finish()
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let Some(secret) = &self.jwt_secret else {
            return Err(ConfigError::auth(
                "auth.jwt_secret is required (or set ACCT_AUTH_JWT_SECRET)",
            ));
        };

        if secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters",
                MIN_JWT_SECRET_LENGTH
            )));
        }

        if self.token_ttl_secs <= 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be greater than 0"));
        }

        if self.renew_threshold_secs < 0 || self.renew_threshold_secs >= self.token_ttl_secs {
            return Err(ConfigError::auth(format!(
                "auth.renew_threshold_secs must be 0-{}, got {}",
                self.token_ttl_secs - 1,
                self.renew_threshold_secs
            )));
        }

        if let Some(path) = self.public_paths.iter().find(|p| !p.starts_with('/')) {
            return Err(ConfigError::auth(format!(
                "auth.public_paths entries must start with '/', got '{}'",
                path
            )));
        }

        Ok(())
    }
}
