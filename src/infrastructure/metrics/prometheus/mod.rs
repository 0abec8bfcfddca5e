mod counters;
mod prometheus_metrics;
mod recorder;

pub use prometheus_metrics::PrometheusMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{
    increment_deck_created, increment_login, increment_storage_failure, track_operation,
};
pub(crate) use recorder::{init_metrics, render_metrics};

/// Creates a new Prometheus metrics implementation.
///
/// Installs the global recorder on first use. Rendered output is available
/// through [`crate::LocalStore::metrics_snapshot`].
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing Prometheus metrics");
    init_metrics()?;

    Ok(Arc::new(PrometheusMetrics::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_returns_valid_metrics() {
        let result = create();
        assert!(result.is_ok());
    }

    #[test]
    fn test_recorded_counters_are_rendered() {
        let metrics = create().unwrap();
        metrics.record_deck_created();
        metrics.record_login(false);

        let text = metrics.render();
        assert!(text.contains("decks_created_total"));
        assert!(text.contains("login_attempts_total"));
    }
}
