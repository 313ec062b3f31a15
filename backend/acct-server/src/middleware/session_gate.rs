//! Bearer-token gate in front of every route.
//!
//! Rejected requests never reach a handler and get a 401 with an empty
//! body, whatever check failed. Accepted requests carry an
//! [`AuthenticatedUser`] extension; a renewed token, when one was minted,
//! is attached to the response in the `x-jwt-token` header.

use crate::{AppState, AuthenticatedUser};

use acct_auth::{Admission, RENEWED_TOKEN_HEADER};
use acct_core::clock::now_secs;

use axum::{
    extract::{Request, State},
    http::{
        HeaderValue, StatusCode,
        header::{AUTHORIZATION, USER_AGENT},
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use log::{debug, error};

pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let headers = request.headers();
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());
    let user_agent = headers
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let admission = match state.gate.admit(&path, authorization, user_agent, now_secs()) {
        Ok(admission) => admission,
        Err(e) if e.is_internal() => {
            error!("Session renewal failed on {}: {}", path, e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
        Err(e) => {
            debug!("Unauthorized request to {}: {}", path, e.error_code());
            metrics::counter!("session_rejections_total", "reason" => e.error_code())
                .increment(1);
            return StatusCode::UNAUTHORIZED.into_response();
        }
    };

    let (email, renewed_token) = match admission {
        Admission::Public => return next.run(request).await,
        Admission::Authenticated {
            email,
            renewed_token,
        } => (email, renewed_token),
    };

    // Validate the header before the handler runs so a failure cannot
    // follow a completed write.
    let renewed_header = match renewed_token.map(HeaderValue::try_from).transpose() {
        Ok(value) => value,
        Err(e) => {
            error!("Renewed token is not a valid header value: {}", e);
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    request.extensions_mut().insert(AuthenticatedUser { email });
    let mut response = next.run(request).await;

    if let Some(value) = renewed_header {
        metrics::counter!("session_renewals_total").increment(1);
        response.headers_mut().insert(RENEWED_TOKEN_HEADER, value);
    }

    response
}
