use acct_core::ErrorLocation;

use std::panic::Location;

use bb8_redis::{bb8::RunError, redis::RedisError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache backend error: {message} {location}")]
    Backend {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cache serialization error for {key}: {source} {location}")]
    Serialization {
        key: String,
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CacheError {
    #[track_caller]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RedisError> for CacheError {
    #[track_caller]
    fn from(err: RedisError) -> Self {
        Self::Backend {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<RunError<RedisError>> for CacheError {
    #[track_caller]
    fn from(err: RunError<RedisError>) -> Self {
        Self::Backend {
            message: format!("Failed to get redis connection: {}", err),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;
