pub mod claims;
pub mod error;
pub mod password;
pub mod session_gate;
pub mod token_service;

pub use claims::SessionClaims;
pub use error::{AuthError, Result};
pub use password::{Argon2Hasher, CredentialHasher};
pub use session_gate::{Admission, SessionGate};
pub use token_service::TokenService;

/// Response header carrying a freshly issued session token
pub const RENEWED_TOKEN_HEADER: &str = "x-jwt-token";

/// Lifetime of an issued session token (seconds)
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 60 * 60;

/// Tokens with less validity left than this are reissued (seconds)
pub const DEFAULT_RENEW_THRESHOLD_SECS: i64 = 30 * 60;

#[cfg(test)]
mod tests;
