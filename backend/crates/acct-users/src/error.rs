use acct_auth::AuthError;
use acct_cache::CacheError;
use acct_core::{CoreError, ErrorLocation};
use acct_db::DbError;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Email already registered: {email} {location}")]
    EmailConflict {
        email: String,
        location: ErrorLocation,
    },

    #[error("User not found: {key} {location}")]
    UserNotFound {
        key: String,
        location: ErrorLocation,
    },

    #[error("Profile not found for user {user_id} {location}")]
    ProfileNotFound {
        user_id: u64,
        location: ErrorLocation,
    },

    /// Login failed; deliberately silent about which check failed
    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Cache error: {source} {location}")]
    Cache {
        #[source]
        source: CacheError,
        location: ErrorLocation,
    },

    #[error("Credential error: {source} {location}")]
    Credential {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl UserError {
    #[track_caller]
    pub fn invalid_credentials() -> Self {
        Self::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::ProfileNotFound { .. }
        )
    }
}

impl From<DbError> for UserError {
    #[track_caller]
    fn from(err: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            DbError::EmailConflict { email, .. } => Self::EmailConflict { email, location },
            DbError::UserNotFound { key, .. } => Self::UserNotFound { key, location },
            DbError::ProfileNotFound { user_id, .. } => Self::ProfileNotFound { user_id, location },
            source => Self::Store { source, location },
        }
    }
}

impl From<CacheError> for UserError {
    #[track_caller]
    fn from(source: CacheError) -> Self {
        Self::Cache {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for UserError {
    #[track_caller]
    fn from(err: CoreError) -> Self {
        Self::Validation {
            field: err.field().map(str::to_string),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for UserError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Credential {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, UserError>;
