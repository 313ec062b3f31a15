pub mod clock;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, ErrorLocation, Result};
pub use models::profile::Profile;
pub use models::profile_edit::ProfileEdit;
pub use models::user::User;

/// Longest nickname accepted by a profile edit
pub const MAX_NICKNAME_LENGTH: usize = 64;
/// Longest free-text description accepted by a profile edit
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;
/// Shortest password accepted at signup
pub const MIN_PASSWORD_LENGTH: usize = 8;
/// Longest password accepted at signup (bounds hashing cost)
pub const MAX_PASSWORD_LENGTH: usize = 72;
/// Longest email accepted at signup
pub const MAX_EMAIL_LENGTH: usize = 254;

#[cfg(test)]
mod tests;
