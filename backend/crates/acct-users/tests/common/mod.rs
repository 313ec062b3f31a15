#![allow(dead_code)]

use acct_auth::Argon2Hasher;
use acct_cache::{MemoryCacheStore, UserCache};
use acct_db::{SqliteUserStore, connect_in_memory};
use acct_users::{AccountService, UserRepository};

use std::sync::Arc;

use sqlx::SqlitePool;

pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Repository over the shared pool with its own in-process cache
pub fn create_repository(pool: &SqlitePool) -> Arc<UserRepository> {
    let store = Arc::new(SqliteUserStore::new(pool.clone()));
    let cache = UserCache::new(Arc::new(MemoryCacheStore::new()));
    Arc::new(UserRepository::new(store, cache))
}

pub fn create_service(pool: &SqlitePool) -> AccountService {
    AccountService::new(create_repository(pool), Arc::new(Argon2Hasher::new()))
}

pub async fn count_profiles(pool: &SqlitePool, user_id: u64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM user_profiles WHERE user_id = ?")
        .bind(user_id as i64)
        .fetch_one(pool)
        .await
        .expect("Failed to count profiles")
}
