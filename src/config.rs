// src/config.rs

//! Store configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the store.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::{bail, Result};
use std::path::PathBuf;
use std::str::FromStr;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable, falling back to a default.
///
/// Empty values count as missing.
macro_rules! optional_env {
    // ---
    ($key:literal, $default:expr) => {
        std::env::var($key)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| $default.to_string())
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated store configuration.
///
/// This is the single source of truth for startup configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: storage::StorageConfig,
    pub metrics: metrics::MetricsConfig,
}

impl AppConfig {
    /// Loads and validates all configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            storage: storage::StorageConfig::from_env()?,
            metrics: metrics::MetricsConfig::from_env()?,
        })
    }
}

// ============================================================
// Storage configuration
// ============================================================

mod storage {
    // ---
    use super::*;

    /// Which key-value backend holds the persisted documents.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum StorageBackend {
        /// Process-local map. Nothing survives a restart.
        Memory,

        /// One JSON file per key inside `data_dir`.
        File { data_dir: PathBuf },

        /// Plain string values in Redis.
        Redis(RedisConfig),
    }

    /// Storage configuration derived from environment variables.
    #[derive(Debug, Clone)]
    pub struct StorageConfig {
        pub backend: StorageBackend,
    }

    /// Redis connection settings for the Redis backend.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RedisConfig {
        /// Redis connection string.
        pub url: String,

        /// Prepended to every document key. Defaults to `deckstore:`.
        pub key_prefix: String,
    }

    impl RedisConfig {
        /// Builds a [`RedisConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if `DECKSTORE_REDIS_URL` is missing.
        pub fn from_env() -> Result<Self> {
            // ---
            let url = required_env!("DECKSTORE_REDIS_URL");
            let key_prefix = optional_env!("DECKSTORE_REDIS_KEY_PREFIX", "deckstore:");

            Ok(Self { url, key_prefix })
        }
    }

    impl StorageConfig {
        /// Builds a [`StorageConfig`] from environment variables.
        ///
        /// `DECKSTORE_BACKEND` selects `memory` (default), `file` or `redis`.
        ///
        /// # Errors
        /// Returns an error for an unknown backend name, or when the selected
        /// backend is missing its required settings.
        pub fn from_env() -> Result<Self> {
            // ---
            let kind: BackendKind = optional_env!("DECKSTORE_BACKEND", "memory").parse()?;

            let backend = match kind {
                BackendKind::Memory => StorageBackend::Memory,
                BackendKind::File => StorageBackend::File {
                    data_dir: PathBuf::from(optional_env!(
                        "DECKSTORE_DATA_DIR",
                        "./deckstore-data"
                    )),
                },
                BackendKind::Redis => StorageBackend::Redis(RedisConfig::from_env()?),
            };

            Ok(Self { backend })
        }
    }

    enum BackendKind {
        Memory,
        File,
        Redis,
    }

    impl FromStr for BackendKind {
        type Err = anyhow::Error;

        fn from_str(s: &str) -> Result<Self> {
            match s.trim().to_ascii_lowercase().as_str() {
                "memory" => Ok(BackendKind::Memory),
                "file" => Ok(BackendKind::File),
                "redis" => Ok(BackendKind::Redis),
                other => bail!("Unknown storage backend: {other} (expected memory, file or redis)"),
            }
        }
    }
}
pub use self::storage::{RedisConfig, StorageBackend, StorageConfig};

// ============================================================
// Metrics configuration
// ============================================================

mod metrics {
    // ---
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum MetricsKind {
        Noop,
        Prometheus,
    }

    /// Metrics configuration. `DECKSTORE_METRICS_TYPE` is `noop` (default)
    /// or `prom`.
    #[derive(Debug, Clone)]
    pub struct MetricsConfig {
        pub kind: MetricsKind,
    }

    impl MetricsConfig {
        pub fn from_env() -> Result<Self> {
            // ---
            let kind = match optional_env!("DECKSTORE_METRICS_TYPE", "noop").as_str() {
                "noop" => MetricsKind::Noop,
                "prom" => MetricsKind::Prometheus,
                other => bail!("Unknown metrics type: {other} (expected noop or prom)"),
            };

            Ok(Self { kind })
        }
    }
}
pub use self::metrics::{MetricsConfig, MetricsKind};

// ============================================================
// Tests
// ============================================================
