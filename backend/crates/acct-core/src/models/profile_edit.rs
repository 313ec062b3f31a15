use crate::clock::parse_birthday;
use crate::{
    CoreError, ErrorLocation, MAX_DESCRIPTION_LENGTH, MAX_NICKNAME_LENGTH,
    Result as CoreErrorResult,
};

use std::panic::Location;

/// The caller-supplied mutable fields of a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileEdit {
    pub nickname: String,
    pub birthday: i64,
    pub description: String,
}

impl ProfileEdit {
    /// Validate raw input and parse the birthday (`YYYY-MM-DD`)
    #[track_caller]
    pub fn parse(nickname: &str, birthday: &str, description: &str) -> CoreErrorResult<Self> {
        let nickname = nickname.trim();
        if nickname.chars().count() > MAX_NICKNAME_LENGTH {
            return Err(CoreError::Validation {
                message: format!("nickname exceeds maximum length ({MAX_NICKNAME_LENGTH})"),
                field: Some("nickname".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if description.chars().count() > MAX_DESCRIPTION_LENGTH {
            return Err(CoreError::Validation {
                message: format!("description exceeds maximum length ({MAX_DESCRIPTION_LENGTH})"),
                field: Some("description".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            nickname: nickname.to_string(),
            birthday: parse_birthday(birthday)?,
            description: description.to_string(),
        })
    }
}
