//! Identity placed on the request by the session-gate middleware

use crate::ApiError;

use std::future::Future;
use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Email of the caller whose bearer token was accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub email: String,
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| {
                    // Only reachable when a route is mounted outside the gate
                    log::warn!("No authenticated user on request to {}", parts.uri.path());
                    ApiError::Unauthorized {
                        message: "Authentication required".to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    }
                })
        }
    }
}
