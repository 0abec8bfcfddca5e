// Store metrics backends, selected by DECKSTORE_METRICS_TYPE
pub mod noop;
pub mod prometheus;

pub use self::noop::create as create_noop_metrics;
pub use self::noop::NoopMetrics;
pub use self::prometheus::create as create_prom_metrics;
pub use self::prometheus::PrometheusMetrics;
