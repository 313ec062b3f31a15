//! Signup input checks.

use crate::{
    CoreError, ErrorLocation, MAX_EMAIL_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
    Result as CoreErrorResult,
};

use std::panic::Location;

/// Accepts `local@domain.tld` shapes: one `@`, non-empty local part, and a
/// dotted domain whose labels are non-empty.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<()> {
    let invalid = |message: &str| CoreError::Validation {
        message: message.to_string(),
        field: Some("email".to_string()),
        location: ErrorLocation::from(Location::caller()),
    };

    if email.is_empty() || email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email must be 1-254 characters"));
    }

    if email.chars().any(char::is_whitespace) {
        return Err(invalid("email cannot contain whitespace"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(invalid("email must contain '@'"));
    };

    if local.is_empty() || domain.contains('@') {
        return Err(invalid("email format is invalid"));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid("email domain is invalid"));
    }

    Ok(())
}

/// Password complexity: 8-72 characters containing a letter, a digit and a symbol
#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    let length = password.chars().count();
    let complex = password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
        && password
            .chars()
            .any(|c| !c.is_ascii_alphanumeric() && !c.is_whitespace());

    if !(MIN_PASSWORD_LENGTH..=MAX_PASSWORD_LENGTH).contains(&length) || !complex {
        return Err(CoreError::Validation {
            message: format!(
                "password must be {MIN_PASSWORD_LENGTH}-{MAX_PASSWORD_LENGTH} characters with a letter, a digit and a symbol"
            ),
            field: Some("password".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(())
}
