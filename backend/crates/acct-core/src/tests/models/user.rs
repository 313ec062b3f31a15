use crate::User;

use googletest::prelude::*;

#[test]
fn given_new_user_then_id_is_unassigned_and_timestamps_match() {
    let user = User::new("a@b.com", "hash");

    assert_that!(user.id, eq(0));
    assert_that!(user.email, eq("a@b.com"));
    assert_that!(user.created_at, eq(user.updated_at));
    assert!(!user.is_deleted());
}

#[test]
fn given_user_snapshot_when_serialized_then_deserializes_to_identical_value() {
    let mut user = User::new("a@b.com", "$argon2id$v=19$...");
    user.id = 42;

    let json = serde_json::to_vec(&user).unwrap();
    let restored: User = serde_json::from_slice(&json).unwrap();

    assert_that!(restored, eq(&user));
}
