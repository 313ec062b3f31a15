//! User lookup cache.
//!
//! Three key families, each namespaced by a fixed tag:
//! `acct:user:id:{id}`, `acct:user:email:{email}` and
//! `acct:profile:user:{user_id}`. Values are JSON snapshots of the records.

use crate::{CacheError, CacheStore, DEFAULT_TTL, Result as CacheErrorResult};

use acct_core::{ErrorLocation, Profile, User};

use std::panic::Location;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};

const USER_ID_PREFIX: &str = "acct:user:id:";
const USER_EMAIL_PREFIX: &str = "acct:user:email:";
const PROFILE_PREFIX: &str = "acct:profile:user:";

pub fn user_id_key(id: u64) -> String {
    format!("{USER_ID_PREFIX}{id}")
}

pub fn user_email_key(email: &str) -> String {
    format!("{USER_EMAIL_PREFIX}{email}")
}

pub fn profile_key(user_id: u64) -> String {
    format!("{PROFILE_PREFIX}{user_id}")
}

#[derive(Clone)]
pub struct UserCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
}

impl UserCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self::with_ttl(store, DEFAULT_TTL)
    }

    pub fn with_ttl(store: Arc<dyn CacheStore>, ttl: Duration) -> Self {
        Self { store, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn find_user_by_id(&self, id: u64) -> CacheErrorResult<Option<User>> {
        self.get_json(&user_id_key(id)).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> CacheErrorResult<Option<User>> {
        self.get_json(&user_email_key(email)).await
    }

    pub async fn find_profile_by_user(&self, user_id: u64) -> CacheErrorResult<Option<Profile>> {
        self.get_json(&profile_key(user_id)).await
    }

    /// Write one snapshot under both the by-id and the by-email key.
    ///
    /// A failure on the by-id write is returned before the by-email write is
    /// attempted. A failure on the by-email write deletes the by-id entry
    /// again so that neither key is left holding the snapshot alone; the
    /// original error is returned either way.
    pub async fn set_user(&self, user: &User) -> CacheErrorResult<()> {
        let id_key = user_id_key(user.id);
        let email_key = user_email_key(&user.email);
        let bytes = encode(&id_key, user)?;

        self.store.set(&id_key, bytes.clone(), self.ttl).await?;

        if let Err(e) = self.store.set(&email_key, bytes, self.ttl).await {
            if let Err(rollback) = self.store.delete(&id_key).await {
                warn!("Failed to roll back {} after partial user write: {}", id_key, rollback);
            }
            return Err(e);
        }

        debug!("Cached user {}", user.id);
        Ok(())
    }

    pub async fn set_profile(&self, profile: &Profile) -> CacheErrorResult<()> {
        let key = profile_key(profile.user_id);
        let bytes = encode(&key, profile)?;
        self.store.set(&key, bytes, self.ttl).await
    }

    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> CacheErrorResult<Option<T>> {
        let Some(bytes) = self.store.get(key).await? else {
            return Ok(None);
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| CacheError::Serialization {
                key: key.to_string(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

#[track_caller]
fn encode<T: Serialize>(key: &str, value: &T) -> CacheErrorResult<Vec<u8>> {
    serde_json::to_vec(value).map_err(|source| CacheError::Serialization {
        key: key.to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}
