use acct_core::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
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

    #[error("Email already registered: {email} {location}")]
    EmailConflict {
        email: String,
        location: ErrorLocation,
    },

    #[error("Profile already exists for user {user_id} {location}")]
    ProfileConflict {
        user_id: u64,
        location: ErrorLocation,
    },

    #[error("Invalid row in {table}: {message} {location}")]
    InvalidRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound { .. } | Self::ProfileNotFound { .. }
        )
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// True when the statement failed on a UNIQUE / PRIMARY KEY constraint
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error.is_unique_violation(),
        _ => false,
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
