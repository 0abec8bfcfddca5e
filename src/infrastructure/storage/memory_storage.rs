use crate::domain::KeyValueStorage;
use anyhow::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory backend, used by tests and as the default when nothing else is
/// configured.
#[derive(Default)]
pub struct MemoryStorage {
    // ---
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    // ---
    pub fn new() -> Self {
        // ---
        Self::default()
    }

    /// Number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for MemoryStorage {
    // ---
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        // ---
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        // ---
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        // ---
        self.items.write().await.remove(key);
        Ok(())
    }
}
