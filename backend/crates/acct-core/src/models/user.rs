//! User account record.

use crate::clock::now_millis;

use serde::{Deserialize, Serialize};

/// A registered account.
///
/// Owned by the relational store. Cached copies are value snapshots of this
/// struct serialized as JSON, so every field must round-trip through serde.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identity; `0` until the row has been inserted
    pub id: u64,
    pub email: String,
    /// Opaque one-way hash of the password (PHC string)
    pub password_hash: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl User {
    /// Create an unsaved user; the store assigns the id on insert
    pub fn new(email: impl Into<String>, password_hash: impl Into<String>) -> Self {
        let now = now_millis();
        Self {
            id: 0,
            email: email.into(),
            password_hash: password_hash.into(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if user is deleted (soft delete)
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
