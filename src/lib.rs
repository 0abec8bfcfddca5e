// src/lib.rs
use anyhow::Result;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod config;
mod infrastructure;
mod seed;
mod store;

// Hoist up only the public symbol(s)
pub use seed::{DEMO_PASSWORD, DEMO_USERNAME};
pub use store::{LocalStore, DECKS_KEY, TOKEN_KEY, USERS_KEY};

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_file_storage, // ---
    create_memory_storage,
    create_noop_metrics,
    create_prom_metrics,
    create_redis_storage,
    FileStorage,
    MemoryStorage,
    NoopMetrics,
    PrometheusMetrics,
    RedisStorage,
};

/// Build the store with backends determined by environment variables.
pub fn create_store() -> Result<LocalStore> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    create_store_with_config(&config)
}

/// Build the store from an already loaded configuration.
pub fn create_store_with_config(config: &AppConfig) -> Result<LocalStore> {
    // ---
    let metrics = match config.metrics.kind {
        MetricsKind::Prometheus => create_prom_metrics()?,
        MetricsKind::Noop => create_noop_metrics()?,
    };

    let storage = match &config.storage.backend {
        StorageBackend::Memory => create_memory_storage()?,
        StorageBackend::File { data_dir } => create_file_storage(data_dir.clone())?,
        StorageBackend::Redis(redis) => create_redis_storage(redis)?,
    };

    Ok(LocalStore::new(storage, metrics))
}
