use crate::Result as DbErrorResult;

use acct_core::{Profile, User};

use async_trait::async_trait;

/// CRUD over the `users` and `user_profiles` tables.
///
/// Lookups that find nothing return `DbError::UserNotFound` /
/// `DbError::ProfileNotFound`; uniqueness violations surface as
/// `DbError::EmailConflict` / `DbError::ProfileConflict`.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return it with its assigned id
    async fn insert(&self, user: &User) -> DbErrorResult<User>;

    async fn find_by_email(&self, email: &str) -> DbErrorResult<User>;

    async fn find_by_id(&self, id: u64) -> DbErrorResult<User>;

    async fn find_profile_by_user(&self, user_id: u64) -> DbErrorResult<Profile>;

    /// Insert a profile scoped to `user_id` (overrides `profile.user_id`)
    async fn insert_profile(&self, user_id: u64, profile: &Profile) -> DbErrorResult<Profile>;

    /// Persist the mutable fields of an existing profile row
    async fn update_profile(&self, profile: &Profile) -> DbErrorResult<Profile>;
}
