use acct_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Malformed authorization header: expected 'Bearer <token>' {location}")]
    MalformedHeader { location: ErrorLocation },

    #[error("Invalid token: {message} {location}")]
    InvalidToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("Token was issued to a different user agent {location}")]
    FingerprintMismatch { location: ErrorLocation },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Token signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid token settings: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Failures of this service rather than of the caller's credentials
    pub fn is_internal(&self) -> bool {
        matches!(
            self,
            Self::Signing { .. } | Self::Configuration { .. } | Self::Hashing { .. }
        )
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::MalformedHeader { .. } => "MALFORMED_AUTH_HEADER",
            Self::InvalidToken { .. } => "INVALID_TOKEN",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::FingerprintMismatch { .. } => "FINGERPRINT_MISMATCH",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::Signing { .. } => "TOKEN_SIGNING_FAILED",
            Self::Configuration { .. } => "INVALID_TOKEN_SETTINGS",
            Self::Hashing { .. } => "HASHING_FAILED",
        }
    }

    #[track_caller]
    pub(crate) fn invalid_claim(claim: &str, message: impl Into<String>) -> Self {
        Self::InvalidClaim {
            claim: claim.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
