pub mod metrics;
mod storage;

// Re-export the factory functions for easy access
pub use self::metrics::{create_noop_metrics, create_prom_metrics, NoopMetrics, PrometheusMetrics};
pub use self::storage::{create_file_storage, create_memory_storage, create_redis_storage};
pub use self::storage::{FileStorage, MemoryStorage, RedisStorage};
