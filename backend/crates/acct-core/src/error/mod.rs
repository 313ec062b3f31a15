pub use error_location::ErrorLocation;

// -------------------------------------------------------------------------- //

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid birthday '{value}': expected YYYY-MM-DD {location}")]
    InvalidBirthday {
        value: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Name of the offending input field, if the error is tied to one
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            Self::InvalidBirthday { .. } => Some("birthday"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
