pub mod connection;
pub mod error;
pub mod stores;

pub use connection::sqlite_pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use stores::sqlite_user_store::SqliteUserStore;
pub use stores::user_store::UserStore;
