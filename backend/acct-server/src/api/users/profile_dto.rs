use acct_core::Profile;

use serde::Serialize;

/// Profile as shown to its owner
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub email: String,
    pub nickname: String,
    /// `YYYY-MM-DD`
    pub birthday: String,
    pub description: String,
    pub updated_at: i64,
}

impl ProfileDto {
    pub fn new(email: impl Into<String>, profile: Profile) -> Self {
        Self {
            email: email.into(),
            birthday: profile.birthday_date().unwrap_or_default(),
            nickname: profile.nickname,
            description: profile.description,
            updated_at: profile.updated_at,
        }
    }
}
