use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir, setup_valid_env};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Auth
// =========================================================================

#[test]
#[serial]
fn given_no_jwt_secret_when_validate_then_error_mentions_jwt_secret() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::remove("ACCT_AUTH_JWT_SECRET");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("jwt_secret"));
}

#[test]
#[serial]
fn given_jwt_secret_too_short_when_validate_then_error_mentions_32_chars() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("ACCT_AUTH_JWT_SECRET", "tooshort");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("32 characters"));
}

#[test]
#[serial]
fn given_jwt_secret_exactly_32_chars_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _secret = EnvGuard::set("ACCT_AUTH_JWT_SECRET", &"x".repeat(32));

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_renew_threshold_not_below_ttl_when_validate_then_error() {
    // Given
    let _env = setup_valid_env();
    let _ttl = EnvGuard::set("ACCT_AUTH_TOKEN_TTL_SECS", "1800");
    let _renew = EnvGuard::set("ACCT_AUTH_RENEW_THRESHOLD_SECS", "1800");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("renew_threshold_secs"));
}

#[test]
#[serial]
fn given_public_path_without_slash_when_validate_then_error() {
    // Given
    let _env = setup_valid_env();
    let _paths = EnvGuard::set("ACCT_AUTH_PUBLIC_PATHS", "/hello,users/login");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}
