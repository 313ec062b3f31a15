use crate::{AppState, edit_profile, health, login, profile, require_session, signup};

use acct_auth::RENEWED_TOKEN_HEADER;
use acct_config::ServerConfig;

use std::sync::Arc;

use axum::{
    Router,
    http::{
        HeaderName, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    middleware,
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(state.server.clone());

    Router::new()
        // Account endpoints
        .route("/users/signup", post(signup))
        .route("/users/login", post(login))
        .route("/users/edit", post(edit_profile))
        .route("/users/profile", get(profile))
        // Health check endpoints
        .route("/hello", get(health::hello))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics))
        // Every route (and the 404 fallback) passes the session gate
        .layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ))
        .with_state(state)
        // CORS outermost so preflight requests never hit the gate
        .layer(cors)
}

/// Credentialed CORS for the configured origins only.
/// Credentials rule out wildcards, so methods are listed.
fn cors_layer(server: Arc<ServerConfig>) -> CorsLayer {
    let max_age = server.cors_max_age();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _parts| {
            origin
                .to_str()
                .map(|origin| server.allows_origin(origin))
                .unwrap_or(false)
        }))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .expose_headers([HeaderName::from_static(RENEWED_TOKEN_HEADER)])
        .max_age(max_age)
}
