use acct_core::{Profile, ProfileEdit};

/// 1989-08-21T00:00:00Z
pub const TEST_BIRTHDAY: i64 = 619_660_800_000;

pub fn create_test_edit(nickname: &str) -> ProfileEdit {
    ProfileEdit {
        nickname: nickname.to_string(),
        birthday: TEST_BIRTHDAY,
        description: format!("{} writes code", nickname),
    }
}

pub fn create_test_profile(user_id: u64, nickname: &str) -> Profile {
    Profile::from_edit(user_id, &create_test_edit(nickname))
}
