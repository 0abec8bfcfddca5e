mod file_storage;
mod memory_storage;
mod redis_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;
pub use redis_storage::RedisStorage;

use crate::config::RedisConfig;
use crate::domain::StoragePtr;
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;

/// Creates an empty, process-local storage backend.
///
/// Contents are lost when the last handle is dropped.
pub fn create_memory_storage() -> Result<StoragePtr> {
    Ok(Arc::new(MemoryStorage::new()))
}

/// Creates a storage backend keeping one JSON file per key under `dir`.
///
/// The directory is created if missing.
pub fn create_file_storage(dir: impl Into<PathBuf>) -> Result<StoragePtr> {
    Ok(Arc::new(FileStorage::open(dir)?))
}

/// Creates a Redis-backed storage backend.
///
/// No connection is made here; each call opens a multiplexed connection.
pub fn create_redis_storage(config: &RedisConfig) -> Result<StoragePtr> {
    Ok(Arc::new(RedisStorage::new(config)?))
}
