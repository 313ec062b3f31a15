use serde::Deserialize;

/// Request body for POST /users/edit
#[derive(Debug, Deserialize)]
pub struct EditProfileRequest {
    pub nickname: String,
    /// Calendar date, `YYYY-MM-DD`
    pub birthday: String,
    #[serde(default)]
    pub description: String,
}
