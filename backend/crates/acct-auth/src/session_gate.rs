//! Per-request authentication decision with sliding renewal.

use crate::{AuthError, Result as AuthErrorResult, TokenService};

use acct_core::ErrorLocation;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::Arc;

use log::debug;

const BEARER_SCHEME: &str = "Bearer";

/// Outcome of [`SessionGate::admit`] for a request that may proceed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// Path is on the allow-list; no credential was inspected
    Public,
    Authenticated {
        email: String,
        /// Replacement token to hand back when the presented one is close to expiry
        renewed_token: Option<String>,
    },
}

pub struct SessionGate {
    tokens: Arc<TokenService>,
    public_paths: HashSet<String>,
}

impl SessionGate {
    pub fn new<I, S>(tokens: Arc<TokenService>, public_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens,
            public_paths: public_paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.contains(path)
    }

    /// Decide whether a request may reach its handler.
    ///
    /// Every `Err` except a renewal signing failure is a rejection of the
    /// caller's credential; callers should not reveal which check failed.
    pub fn admit(
        &self,
        path: &str,
        authorization: Option<&str>,
        user_agent: &str,
        now: i64,
    ) -> AuthErrorResult<Admission> {
        if self.is_public(path) {
            return Ok(Admission::Public);
        }

        let token = bearer_token(authorization)?;
        let claims = self.tokens.verify(token, now, user_agent).inspect_err(|e| {
            debug!("Rejected credential for {}: {}", path, e);
        })?;

        let renewed_token = if self.tokens.needs_renewal(&claims, now) {
            debug!("Renewing session for {} ({}s left)", claims.sub, claims.remaining(now));
            Some(self.tokens.renew(&claims, now)?)
        } else {
            None
        };

        Ok(Admission::Authenticated {
            email: claims.sub,
            renewed_token,
        })
    }
}

/// Split `Bearer <token>` into its token; anything but exactly two
/// space-separated segments is malformed.
#[track_caller]
pub fn bearer_token(header: Option<&str>) -> AuthErrorResult<&str> {
    let Some(header) = header else {
        return Err(AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        });
    };

    let segments: Vec<&str> = header.split(' ').collect();
    match segments.as_slice() {
        [scheme, token] if *scheme == BEARER_SCHEME && !token.is_empty() => Ok(*token),
        _ => Err(AuthError::MalformedHeader {
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
