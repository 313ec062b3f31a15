use crate::{ApiError, AuthenticatedUser};

use axum::extract::FromRequestParts;
use googletest::assert_that;
use googletest::prelude::eq;
use http::Request;

#[tokio::test]
async fn given_extension_set_by_gate_when_extracting_then_returns_email() {
    // Given
    let mut request = Request::builder().uri("/users/profile").body(()).unwrap();
    request.extensions_mut().insert(AuthenticatedUser {
        email: "a@b.com".into(),
    });
    let (mut parts, _) = request.into_parts();

    // When
    let user = AuthenticatedUser::from_request_parts(&mut parts, &())
        .await
        .unwrap();

    // Then
    assert_that!(user.email.as_str(), eq("a@b.com"));
}

#[tokio::test]
async fn given_no_extension_when_extracting_then_unauthorized() {
    // Given
    let request = Request::builder().uri("/users/profile").body(()).unwrap();
    let (mut parts, _) = request.into_parts();

    // When
    let result = AuthenticatedUser::from_request_parts(&mut parts, &()).await;

    // Then
    assert!(matches!(result, Err(ApiError::Unauthorized { .. })));
}
