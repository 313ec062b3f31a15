pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::authenticated_user::AuthenticatedUser,
    users::{
        edit_profile_request::EditProfileRequest,
        login_request::LoginRequest,
        login_response::LoginResponse,
        profile_dto::ProfileDto,
        profile_response::ProfileResponse,
        signup_request::SignupRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{edit_profile, login, profile, signup},
    },
};
pub use app_state::{AppState, connect_cache};
pub use error::{Result as ServerResult, ServerError};
pub use middleware::session_gate::require_session;

pub use crate::routes::build_router;
