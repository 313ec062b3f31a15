use serde::Serialize;

/// Signed session token; the same value is also sent in the `x-jwt-token` header
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
