//! SQLite implementation of [`UserStore`].
//!
//! Ids are `u64` in the domain and `INTEGER` (i64) in SQLite; conversion
//! failures in either direction are reported, never truncated.

use crate::error::is_unique_violation;
use crate::{DbError, Result as DbErrorResult, UserStore};

use acct_core::{ErrorLocation, Profile, User};

use std::panic::Location;

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
    password_hash: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: row_id("users", row.id)?,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    user_id: i64,
    nickname: String,
    birthday: i64,
    description: String,
    created_at: i64,
    updated_at: i64,
    deleted_at: Option<i64>,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DbError;

    #[track_caller]
    fn try_from(row: ProfileRow) -> DbErrorResult<Self> {
        Ok(Profile {
            id: row_id("user_profiles", row.id)?,
            user_id: row_id("user_profiles", row.user_id)?,
            nickname: row.nickname,
            birthday: row.birthday,
            description: row.description,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

#[track_caller]
fn row_id(table: &'static str, value: i64) -> DbErrorResult<u64> {
    u64::try_from(value).map_err(|_| DbError::InvalidRow {
        table,
        message: format!("negative id {}", value),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn sql_id(table: &'static str, value: u64) -> DbErrorResult<i64> {
    i64::try_from(value).map_err(|_| DbError::InvalidRow {
        table,
        message: format!("id {} exceeds INTEGER range", value),
        location: ErrorLocation::from(Location::caller()),
    })
}

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn insert(&self, user: &User) -> DbErrorResult<User> {
        let result = sqlx::query(
            r#"
                INSERT INTO users (email, password_hash, created_at, updated_at, deleted_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.created_at)
        .bind(user.updated_at)
        .bind(user.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::EmailConflict {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                DbError::from(e)
            }
        })?;

        let mut inserted = user.clone();
        inserted.id = row_id("users", result.last_insert_rowid())?;

        Ok(inserted)
    }

    async fn find_by_email(&self, email: &str) -> DbErrorResult<User> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, created_at, updated_at, deleted_at
                FROM users
                WHERE email = ? AND deleted_at IS NULL
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| DbError::UserNotFound {
            key: email.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?
        .try_into()
    }

    async fn find_by_id(&self, id: u64) -> DbErrorResult<User> {
        let not_found = || DbError::UserNotFound {
            key: id.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        // No row can carry an id outside the INTEGER range
        let Ok(sql_id) = i64::try_from(id) else {
            return Err(not_found());
        };

        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, email, password_hash, created_at, updated_at, deleted_at
                FROM users
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(sql_id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(not_found)?.try_into()
    }

    async fn find_profile_by_user(&self, user_id: u64) -> DbErrorResult<Profile> {
        let not_found = || DbError::ProfileNotFound {
            user_id,
            location: ErrorLocation::from(Location::caller()),
        };

        let Ok(sql_user_id) = i64::try_from(user_id) else {
            return Err(not_found());
        };

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT id, user_id, nickname, birthday, description,
                    created_at, updated_at, deleted_at
                FROM user_profiles
                WHERE user_id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(sql_user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(not_found)?.try_into()
    }

    async fn insert_profile(&self, user_id: u64, profile: &Profile) -> DbErrorResult<Profile> {
        let sql_user_id = sql_id("user_profiles", user_id)?;

        let result = sqlx::query(
            r#"
                INSERT INTO user_profiles (
                    user_id, nickname, birthday, description,
                    created_at, updated_at, deleted_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sql_user_id)
        .bind(&profile.nickname)
        .bind(profile.birthday)
        .bind(&profile.description)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .bind(profile.deleted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DbError::ProfileConflict {
                    user_id,
                    location: ErrorLocation::from(Location::caller()),
                }
            } else {
                DbError::from(e)
            }
        })?;

        let mut inserted = profile.clone();
        inserted.id = row_id("user_profiles", result.last_insert_rowid())?;
        inserted.user_id = user_id;

        Ok(inserted)
    }

    async fn update_profile(&self, profile: &Profile) -> DbErrorResult<Profile> {
        let id = sql_id("user_profiles", profile.id)?;

        let result = sqlx::query(
            r#"
                UPDATE user_profiles
                SET nickname = ?, birthday = ?, description = ?, updated_at = ?
                WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&profile.nickname)
        .bind(profile.birthday)
        .bind(&profile.description)
        .bind(profile.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::ProfileNotFound {
                user_id: profile.user_id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(profile.clone())
    }
}
