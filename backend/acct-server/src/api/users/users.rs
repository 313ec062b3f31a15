//! Account REST API handlers
//!
//! Signup and login are public; edit and profile sit behind the session
//! gate and read the caller from [`AuthenticatedUser`].

use crate::{
    ApiResult, AppState, AuthenticatedUser, EditProfileRequest, LoginRequest, LoginResponse,
    ProfileDto, ProfileResponse, SignupRequest, UserResponse,
};

use acct_auth::RENEWED_TOKEN_HEADER;
use acct_core::clock::now_secs;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::USER_AGENT},
    response::IntoResponse,
};

// =============================================================================
// Handlers
// =============================================================================

/// POST /users/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .accounts
        .signup(&req.email, &req.password, &req.confirm_password)
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// POST /users/login
///
/// The issued token is bound to the caller's `User-Agent`.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let user = state.accounts.login(&req.email, &req.password).await?;

    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let token = state.tokens.issue(&user.email, user_agent, now_secs())?;

    metrics::counter!("account_logins_total").increment(1);
    log::info!("User {} logged in", user.id);

    Ok((
        [(RENEWED_TOKEN_HEADER, token.clone())],
        Json(LoginResponse { token }),
    ))
}

/// POST /users/edit
pub async fn edit_profile(
    State(state): State<AppState>,
    AuthenticatedUser { email }: AuthenticatedUser,
    Json(req): Json<EditProfileRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let profile = state
        .accounts
        .edit_profile(&email, &req.nickname, &req.birthday, &req.description)
        .await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(email, profile),
    }))
}

/// GET /users/profile
pub async fn profile(
    State(state): State<AppState>,
    AuthenticatedUser { email }: AuthenticatedUser,
) -> ApiResult<Json<ProfileResponse>> {
    let (user, profile) = state.accounts.profile(&email).await?;

    Ok(Json(ProfileResponse {
        profile: ProfileDto::new(user.email, profile),
    }))
}
