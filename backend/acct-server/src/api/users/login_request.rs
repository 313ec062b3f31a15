use serde::Deserialize;

/// Request body for POST /users/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}
