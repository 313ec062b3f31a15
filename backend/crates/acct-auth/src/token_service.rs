use crate::{
    AuthError, DEFAULT_RENEW_THRESHOLD_SECS, DEFAULT_TOKEN_TTL_SECS, Result as AuthErrorResult,
    SessionClaims,
};

use acct_core::ErrorLocation;

use std::panic::Location;

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Issues and verifies HS512 session tokens.
///
/// The signing secret is fixed at construction. Expiry is checked against
/// the caller-supplied clock rather than the system clock, so verification
/// is a pure function of (token, now, fingerprint).
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
    renew_threshold_secs: i64,
}

impl TokenService {
    #[track_caller]
    pub fn new(secret: &[u8], ttl_secs: i64, renew_threshold_secs: i64) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::Configuration {
                message: "secret cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if ttl_secs <= 0 || renew_threshold_secs < 0 || renew_threshold_secs >= ttl_secs {
            return Err(AuthError::Configuration {
                message: format!(
                    "renew threshold ({}s) must be below token ttl ({}s)",
                    renew_threshold_secs, ttl_secs
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl_secs,
            renew_threshold_secs,
        })
    }

    /// 1 hour tokens, renewed in their last 30 minutes
    #[track_caller]
    pub fn with_defaults(secret: &[u8]) -> AuthErrorResult<Self> {
        Self::new(secret, DEFAULT_TOKEN_TTL_SECS, DEFAULT_RENEW_THRESHOLD_SECS)
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Sign a fresh token for `email` bound to `user_agent`
    #[track_caller]
    pub fn issue(&self, email: &str, user_agent: &str, now: i64) -> AuthErrorResult<String> {
        self.sign(&SessionClaims::new(email, user_agent, now, self.ttl_secs))
    }

    /// Reissue with the same subject and fingerprint and a full lifetime from `now`
    #[track_caller]
    pub fn renew(&self, claims: &SessionClaims, now: i64) -> AuthErrorResult<String> {
        self.issue(&claims.sub, &claims.user_agent, now)
    }

    pub fn needs_renewal(&self, claims: &SessionClaims, now: i64) -> bool {
        claims.remaining(now) < self.renew_threshold_secs
    }

    /// Verify signature, expiry, subject and fingerprint
    #[track_caller]
    pub fn verify(&self, token: &str, now: i64, user_agent: &str) -> AuthErrorResult<SessionClaims> {
        let token_data = decode::<SessionClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| AuthError::InvalidToken {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        token_data.claims.validate(now, user_agent)?;

        Ok(token_data.claims)
    }

    #[track_caller]
    fn sign(&self, claims: &SessionClaims) -> AuthErrorResult<String> {
        encode(&Header::new(ALGORITHM), claims, &self.encoding_key).map_err(|source| {
            AuthError::Signing {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
