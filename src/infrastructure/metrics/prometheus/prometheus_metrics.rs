//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus metrics format. It delegates to utility functions in sibling
//! modules (`counters.rs`, `recorder.rs`) which handle the actual metrics
//! collection via the global `metrics` crate registry.

use crate::domain::Metrics;
use std::time::Instant;

/// Prometheus-based metrics implementation.
///
/// Empty because all metrics live in the global registry; the handle stored
/// in `recorder.rs` renders them.
pub struct PrometheusMetrics {
    // Empty - uses global metrics registry pattern
}

impl PrometheusMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating Prometheus metrics");
        PrometheusMetrics {}
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        super::render_metrics()
    }

    fn record_deck_created(&self) {
        tracing::debug!("Recording deck created event");
        super::increment_deck_created();
    }

    fn record_login(&self, success: bool) {
        tracing::debug!(success, "Recording login attempt");
        super::increment_login(success);
    }

    fn record_storage_failure(&self) {
        super::increment_storage_failure();
    }

    fn record_operation(&self, start: Instant, operation: &str, success: bool) {
        super::track_operation(start, operation, success);
    }
}
