use crate::ApiError;

use acct_auth::AuthError;
use acct_users::UserError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use http::StatusCode;
use http_body_util::BodyExt;

async fn response_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_with_json_body() {
    // Given
    let error = ApiError::NotFound {
        message: "Profile not found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = response_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::NOT_FOUND));
    assert_that!(json["error"]["code"].as_str(), some(eq("NOT_FOUND")));
    assert_that!(json["error"]["message"].as_str(), some(eq("Profile not found")));
    assert_that!(json["error"].get("field"), none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_with_field() {
    // Given
    let error = ApiError::Validation {
        message: "Nickname too long".into(),
        field: Some("nickname".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let (status, json) = response_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_that!(json["error"]["code"].as_str(), some(eq("VALIDATION_ERROR")));
    assert_that!(json["error"]["field"].as_str(), some(eq("nickname")));
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500() {
    // Given
    let error = ApiError::internal("Account operation failed");

    // When
    let (status, json) = response_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_that!(json["error"]["code"].as_str(), some(eq("INTERNAL_ERROR")));
}

#[tokio::test]
async fn given_invalid_credentials_when_rendered_then_generic_401() {
    // Given
    let error = ApiError::from(UserError::invalid_credentials());

    // When
    let (status, json) = response_json(error).await;

    // Then
    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_that!(json["error"]["code"].as_str(), some(eq("INVALID_CREDENTIALS")));
    assert_that!(
        json["error"]["message"].as_str(),
        some(eq("Invalid email or password"))
    );
}

#[test]
fn given_email_conflict_when_converted_then_conflict_without_email() {
    // Given
    let error = UserError::EmailConflict {
        email: "a@b.com".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    match api_error {
        ApiError::Conflict { message, .. } => assert!(!message.contains("a@b.com")),
        other => panic!("Expected Conflict, got {:?}", other),
    }
}

#[test]
fn given_user_validation_error_when_converted_then_field_is_kept() {
    // Given
    let error = UserError::validation("passwords do not match", "confirmPassword");

    // When
    let api_error = ApiError::from(error);

    // Then
    match api_error {
        ApiError::Validation { field, .. } => {
            assert_that!(field.as_deref(), some(eq("confirmPassword")))
        }
        other => panic!("Expected Validation, got {:?}", other),
    }
}

#[test]
fn given_opaque_store_failure_when_converted_then_internal_hides_details() {
    // Given
    let error = UserError::Store {
        source: acct_db::DbError::Initialization {
            message: "disk on fire".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    match api_error {
        ApiError::Internal { message, .. } => assert!(!message.contains("disk on fire")),
        other => panic!("Expected Internal, got {:?}", other),
    }
}

#[test]
fn given_auth_error_when_converted_then_internal() {
    // Given
    let error = AuthError::Configuration {
        message: "empty secret".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    // When
    let api_error = ApiError::from(error);

    // Then
    assert!(matches!(api_error, ApiError::Internal { .. }));
}
