use crate::{AuthError, Result as AuthErrorResult};

use acct_core::ErrorLocation;

use std::panic::Location;

use serde::{Deserialize, Serialize};

/// Session token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (account email)
    pub sub: String,
    /// `User-Agent` of the client the token was issued to
    pub user_agent: String,
    /// Issued at timestamp (Unix seconds)
    pub iat: i64,
    /// Expiration timestamp (Unix seconds)
    pub exp: i64,
}

impl SessionClaims {
    pub fn new(email: &str, user_agent: &str, now: i64, ttl_secs: i64) -> Self {
        Self {
            sub: email.to_string(),
            user_agent: user_agent.to_string(),
            iat: now,
            exp: now.saturating_add(ttl_secs),
        }
    }

    /// Seconds of validity left at `now` (negative once expired)
    pub fn remaining(&self, now: i64) -> i64 {
        self.exp.saturating_sub(now)
    }

    /// Check the claims after signature verification.
    ///
    /// Valid only while `now < exp`, with a non-empty subject and the exact
    /// user agent the token was issued to.
    #[track_caller]
    pub fn validate(&self, now: i64, user_agent: &str) -> AuthErrorResult<()> {
        if self.remaining(now) <= 0 {
            return Err(AuthError::TokenExpired {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.sub.is_empty() {
            return Err(AuthError::invalid_claim("sub", "sub (email) cannot be empty"));
        }

        if self.user_agent != user_agent {
            return Err(AuthError::FingerprintMismatch {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
