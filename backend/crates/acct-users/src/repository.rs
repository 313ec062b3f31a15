//! Cache-aside coordination between [`UserCache`] and [`UserStore`].
//!
//! Reads try the cache first; absence falls through to the store and the
//! row is written back. A failed write-back is logged and counted but never
//! fails the read. Any other cache error propagates without touching the
//! store. Write paths treat a cache failure as fatal even though the store
//! write has already happened.

use crate::{Result as UserErrorResult, UserError};

use acct_cache::{CacheError, UserCache};
use acct_core::{Profile, ProfileEdit, User};
use acct_db::{DbError, UserStore};

use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex, PoisonError};

use log::{debug, warn};
use tokio::sync::Mutex;

const USER_FAMILY: &str = "user";
const PROFILE_FAMILY: &str = "profile";

pub struct UserRepository {
    store: Arc<dyn UserStore>,
    cache: UserCache,
    /// Serializes profile upserts per user within this process. Never held
    /// across an await.
    profile_locks: ProfileLocks,
}

impl UserRepository {
    pub fn new(store: Arc<dyn UserStore>, cache: UserCache) -> Self {
        Self {
            store,
            cache,
            profile_locks: ProfileLocks::default(),
        }
    }

    /// Insert a new user, then cache it under both lookup keys.
    ///
    /// A store failure (including a duplicate email) leaves the cache untouched.
    pub async fn create(&self, user: &User) -> UserErrorResult<User> {
        let created = self.store.insert(user).await?;
        self.cache.set_user(&created).await?;

        debug!("Created user {} ({})", created.id, created.email);
        Ok(created)
    }

    pub async fn find_by_id(&self, id: u64) -> UserErrorResult<User> {
        if let Some(user) = self.cache.find_user_by_id(id).await? {
            record_hit(USER_FAMILY);
            return Ok(user);
        }
        record_miss(USER_FAMILY);

        let user = self.store.find_by_id(id).await?;
        if let Err(e) = self.cache.set_user(&user).await {
            record_backfill_failure(USER_FAMILY, &id.to_string(), &e);
        }

        Ok(user)
    }

    pub async fn find_by_email(&self, email: &str) -> UserErrorResult<User> {
        if let Some(user) = self.cache.find_user_by_email(email).await? {
            record_hit(USER_FAMILY);
            return Ok(user);
        }
        record_miss(USER_FAMILY);

        let user = self.store.find_by_email(email).await?;
        if let Err(e) = self.cache.set_user(&user).await {
            record_backfill_failure(USER_FAMILY, email, &e);
        }

        Ok(user)
    }

    pub async fn find_profile_by_user(&self, user_id: u64) -> UserErrorResult<Profile> {
        if let Some(profile) = self.cache.find_profile_by_user(user_id).await? {
            record_hit(PROFILE_FAMILY);
            return Ok(profile);
        }
        record_miss(PROFILE_FAMILY);

        let profile = self.store.find_profile_by_user(user_id).await?;
        if let Err(e) = self.cache.set_profile(&profile).await {
            record_backfill_failure(PROFILE_FAMILY, &user_id.to_string(), &e);
        }

        Ok(profile)
    }

    /// Create the user's profile, or overwrite it if one already exists.
    ///
    /// Tries an insert first; a uniqueness conflict switches to
    /// fetch → apply → update on the existing row. Either way the resulting
    /// profile is written to the cache before returning. Concurrent calls for
    /// the same user in this process run one at a time; across processes the
    /// last update wins.
    pub async fn add_profile(&self, user_id: u64, edit: &ProfileEdit) -> UserErrorResult<Profile> {
        let lease = ProfileLockLease::acquire(&self.profile_locks, user_id);
        let _guard = lease.lock.lock().await;

        self.upsert_profile(user_id, edit).await
    }

    async fn upsert_profile(&self, user_id: u64, edit: &ProfileEdit) -> UserErrorResult<Profile> {
        let profile = Profile::from_edit(user_id, edit);

        let saved = match self.store.insert_profile(user_id, &profile).await {
            Ok(inserted) => inserted,
            Err(DbError::ProfileConflict { .. }) => {
                debug!("Profile exists for user {}, updating", user_id);
                let mut existing = self.store.find_profile_by_user(user_id).await?;
                existing.apply(edit);
                self.store.update_profile(&existing).await?
            }
            Err(e) => return Err(UserError::from(e)),
        };

        self.cache.set_profile(&saved).await?;
        Ok(saved)
    }

    #[cfg(test)]
    pub(crate) fn pending_profile_locks(&self) -> usize {
        self.profile_locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

type ProfileLocks = StdMutex<HashMap<u64, Arc<Mutex<()>>>>;

/// Claim on one user's upsert lock. Dropping it removes the map entry once
/// no other lease shares it, including when the owning future is cancelled.
struct ProfileLockLease<'a> {
    locks: &'a ProfileLocks,
    user_id: u64,
    lock: Arc<Mutex<()>>,
}

impl<'a> ProfileLockLease<'a> {
    fn acquire(locks: &'a ProfileLocks, user_id: u64) -> Self {
        let lock = locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(user_id)
            .or_default()
            .clone();

        Self {
            locks,
            user_id,
            lock,
        }
    }
}

impl Drop for ProfileLockLease<'_> {
    fn drop(&mut self) {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        // one reference in the map, one here
        if Arc::strong_count(&self.lock) == 2 {
            locks.remove(&self.user_id);
        }
    }
}

fn record_hit(family: &'static str) {
    metrics::counter!("user_cache_hits_total", "family" => family).increment(1);
}

fn record_miss(family: &'static str) {
    metrics::counter!("user_cache_misses_total", "family" => family).increment(1);
}

fn record_backfill_failure(family: &'static str, key: &str, error: &CacheError) {
    warn!("Cache back-fill failed for {} {}: {}", family, key, error);
    metrics::counter!("user_cache_backfill_failures_total", "family" => family).increment(1);
}
