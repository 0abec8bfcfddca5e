use std::sync::Arc;
use std::time::Instant;

/// Abstraction for application metrics (counters, histograms).
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in Prometheus text format.
    fn render(&self) -> String;

    /// Record a "deck created" event.
    fn record_deck_created(&self);

    /// Record a login attempt and whether the credentials matched.
    fn record_login(&self, success: bool);

    /// Record a backend read/write failure caught at the store boundary.
    fn record_storage_failure(&self);

    /// Record a store operation duration and outcome.
    fn record_operation(&self, start: Instant, operation: &str, success: bool);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
