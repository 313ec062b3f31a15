//! Millisecond timestamps used by every persisted record.

use crate::{CoreError, ErrorLocation, Result as CoreErrorResult};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Current time as milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Current time as seconds since the Unix epoch (session token clock)
pub fn now_secs() -> i64 {
    Utc::now().timestamp()
}

/// Parse a calendar date (`YYYY-MM-DD`) into milliseconds since the epoch at UTC midnight
#[track_caller]
pub fn parse_birthday(value: &str) -> CoreErrorResult<i64> {
    let invalid = || CoreError::InvalidBirthday {
        value: value.to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let date = NaiveDate::parse_from_str(value.trim(), BIRTHDAY_FORMAT).map_err(|_| invalid())?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;

    Ok(midnight.and_utc().timestamp_millis())
}

/// Render a stored birthday back into `YYYY-MM-DD`
pub fn format_birthday(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(|dt| dt.format(BIRTHDAY_FORMAT).to_string())
}
