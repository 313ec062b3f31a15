use crate::{CoreError, MAX_NICKNAME_LENGTH, Profile, ProfileEdit};

use googletest::prelude::*;

#[test]
fn given_valid_input_when_parsing_edit_then_nickname_is_trimmed() {
    let edit = ProfileEdit::parse("  neo  ", "1989-08-21", "hello").unwrap();

    assert_that!(edit.nickname, eq("neo"));
    assert_that!(edit.birthday, eq(619_660_800_000));
    assert_that!(edit.description, eq("hello"));
}

#[test]
fn given_overlong_nickname_when_parsing_edit_then_validation_error() {
    let nickname = "x".repeat(MAX_NICKNAME_LENGTH + 1);

    let result = ProfileEdit::parse(&nickname, "1989-08-21", "");

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field.as_deref(), Some("nickname")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn given_edit_when_building_profile_then_scoped_to_user() {
    let edit = ProfileEdit::parse("neo", "1989-08-21", "desc").unwrap();

    let profile = Profile::from_edit(7, &edit);

    assert_that!(profile.id, eq(0));
    assert_that!(profile.user_id, eq(7));
    assert_that!(profile.nickname, eq("neo"));
    assert_that!(profile.birthday_date(), some(eq("1989-08-21")));
}

#[test]
fn given_existing_profile_when_edit_applied_then_identity_is_preserved() {
    let first = ProfileEdit::parse("neo", "1989-08-21", "first").unwrap();
    let second = ProfileEdit::parse("trinity", "1990-01-01", "second").unwrap();
    let mut profile = Profile::from_edit(7, &first);
    profile.id = 3;
    let created_at = profile.created_at;

    profile.apply(&second);

    assert_that!(profile.id, eq(3));
    assert_that!(profile.user_id, eq(7));
    assert_that!(profile.created_at, eq(created_at));
    assert_that!(profile.nickname, eq("trinity"));
    assert_that!(profile.description, eq("second"));
    assert_that!(profile.updated_at, ge(created_at));
}
