//! Profile record - at most one per user.

use crate::ProfileEdit;
use crate::clock::{format_birthday, now_millis};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Store-assigned row id; `0` until inserted
    pub id: u64,
    /// Owning user (unique across profiles)
    pub user_id: u64,
    pub nickname: String,
    /// Milliseconds since the epoch at UTC midnight of the birth date
    pub birthday: i64,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl Profile {
    /// Build an unsaved profile for `user_id` from an edit
    pub fn from_edit(user_id: u64, edit: &ProfileEdit) -> Self {
        let now = now_millis();
        Self {
            id: 0,
            user_id,
            nickname: edit.nickname.clone(),
            birthday: edit.birthday,
            description: edit.description.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Overwrite the mutable fields with the edit and bump `updated_at`.
    /// Identity and `created_at` are preserved.
    pub fn apply(&mut self, edit: &ProfileEdit) {
        self.nickname = edit.nickname.clone();
        self.birthday = edit.birthday;
        self.description = edit.description.clone();
        self.updated_at = now_millis();
    }

    pub fn birthday_date(&self) -> Option<String> {
        format_birthday(self.birthday)
    }
}
