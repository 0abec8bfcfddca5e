// Test helpers are intentionally partially used
#![allow(dead_code)]

use anyhow::{anyhow, Result};
use deck_store::domain::{KeyValueStorage, StoragePtr};
use deck_store::{create_memory_storage, create_noop_metrics, LocalStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Once};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing once for all tests in a binary.
pub fn init_tracing() {
    // ---
    TRACING_INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_ansi(false) // No colorization, makes logs easier to read.
            .with_test_writer()
            .init();
    });
}

/// A store over a fresh in-memory backend, plus a handle on that backend so
/// tests can inspect raw documents.
pub fn memory_store() -> (LocalStore, StoragePtr) {
    // ---
    init_tracing();

    let storage = create_memory_storage().expect("memory storage");
    let metrics = create_noop_metrics().expect("noop metrics");
    (LocalStore::new(storage.clone(), metrics), storage)
}

/// Wraps a real backend and fails every call while `broken` is set.
pub struct FlakyStorage {
    // ---
    inner: StoragePtr,
    broken: AtomicBool,
}

impl FlakyStorage {
    // ---
    pub fn new(inner: StoragePtr) -> Arc<Self> {
        Arc::new(Self {
            inner,
            broken: AtomicBool::new(false),
        })
    }

    pub fn set_broken(&self, broken: bool) {
        self.broken.store(broken, Ordering::SeqCst);
    }

    fn check(&self) -> Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            Err(anyhow!("device storage unavailable"))
        } else {
            Ok(())
        }
    }
}

#[async_trait::async_trait]
impl KeyValueStorage for FlakyStorage {
    // ---
    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.check()?;
        self.inner.get_item(key).await
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.check()?;
        self.inner.set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        self.check()?;
        self.inner.remove_item(key).await
    }
}

/// A store whose backend can be switched into a failing state.
pub fn flaky_store() -> (LocalStore, Arc<FlakyStorage>) {
    // ---
    init_tracing();

    let flaky = FlakyStorage::new(create_memory_storage().expect("memory storage"));
    let metrics = create_noop_metrics().expect("noop metrics");
    (LocalStore::new(flaky.clone(), metrics), flaky)
}

/// Raw JSON document under `key`, parsed.
pub async fn raw_json(storage: &StoragePtr, key: &str) -> Option<serde_json::Value> {
    // ---
    storage
        .get_item(key)
        .await
        .expect("raw read")
        .map(|s| serde_json::from_str(&s).expect("valid json"))
}
