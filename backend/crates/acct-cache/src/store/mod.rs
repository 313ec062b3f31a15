pub mod cache_store;
pub mod memory_store;
pub mod redis_store;
