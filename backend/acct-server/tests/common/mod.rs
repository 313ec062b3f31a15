#![allow(dead_code)]

//! Test infrastructure for acct-server HTTP tests

use acct_server::{AppState, build_router};

use acct_cache::MemoryCacheStore;
use acct_config::Config;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-chars";
pub const TEST_UA: &str = "Mozilla/5.0 (test-agent)";
pub const TEST_EMAIL: &str = "a@b.com";
pub const TEST_PASSWORD: &str = "Secret1!";

/// Config with a valid secret and every other section at its default
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config
}

/// AppState over in-memory SQLite and the in-process cache, no metrics recorder
pub async fn create_test_app_state() -> AppState {
    let pool = acct_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        &create_test_config(),
        pool,
        Arc::new(MemoryCacheStore::new()),
        None,
    )
    .expect("Failed to build app state")
}

pub async fn create_test_app() -> (Router, AppState) {
    let state = create_test_app_state().await;
    (build_router(state.clone()), state)
}

/// Register the standard test account directly through the service
pub async fn create_test_user(state: &AppState) {
    state
        .accounts
        .signup(TEST_EMAIL, TEST_PASSWORD, TEST_PASSWORD)
        .await
        .expect("Failed to create test user");
}

/// Token for the test account, issued `age_secs` seconds ago
pub fn issue_token_aged(state: &AppState, user_agent: &str, age_secs: i64) -> String {
    state
        .tokens
        .issue(TEST_EMAIL, user_agent, acct_core::clock::now_secs() - age_secs)
        .expect("Failed to issue token")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("user-agent", TEST_UA)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_request(
    method: &str,
    uri: &str,
    token: &str,
    user_agent: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .header("user-agent", user_agent);

    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
