use anyhow::Result;
use std::sync::Arc;

/// Abstraction over a string-keyed document store.
///
/// Values are whole serialized documents; the store never interprets them.
/// Implementations only need to provide last-writer-wins semantics per key.
#[async_trait::async_trait]
pub trait KeyValueStorage: Send + Sync {
    // ---
    /// Get the document stored under `key`, if any.
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous document.
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;
}

/// Type alias for any backend that implements KeyValueStorage.
pub type StoragePtr = Arc<dyn KeyValueStorage>;
