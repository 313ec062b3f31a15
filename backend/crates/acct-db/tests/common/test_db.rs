use acct_core::User;
use acct_db::{SqliteUserStore, UserStore, connect_in_memory};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    connect_in_memory()
        .await
        .expect("Failed to create test pool")
}

pub async fn create_test_store() -> SqliteUserStore {
    SqliteUserStore::new(create_test_pool().await)
}

/// Inserts a user through the store so profile rows have a parent
pub async fn create_test_user(store: &SqliteUserStore, email: &str) -> User {
    store
        .insert(&User::new(email, "$argon2id$stub"))
        .await
        .expect("Failed to create test user")
}
