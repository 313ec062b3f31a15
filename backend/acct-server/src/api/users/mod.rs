pub mod edit_profile_request;
pub mod login_request;
pub mod login_response;
pub mod profile_dto;
pub mod profile_response;
pub mod signup_request;
pub mod user_dto;
pub mod user_response;
#[allow(clippy::module_inception)]
pub mod users;
