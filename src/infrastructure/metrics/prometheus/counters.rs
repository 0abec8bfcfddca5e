use metrics::{counter, histogram};
use std::time::Instant;

/// Increment a counter for created decks.
pub fn increment_deck_created() {
    counter!("decks_created_total").increment(1);
}

/// Count login attempts, labelled by result.
pub fn increment_login(success: bool) {
    let result = if success { "success" } else { "failure" };
    counter!("login_attempts_total", "result" => result).increment(1);
}

/// Count backend failures seen by the store.
pub fn increment_storage_failure() {
    counter!("storage_failures_total").increment(1);
}

/// Track store operation latency using a histogram.
pub fn track_operation(start: Instant, operation: &str, success: bool) {
    let elapsed = start.elapsed();
    let outcome = if success { "ok" } else { "error" };
    histogram!(
        "store_operation_duration_seconds",
        "operation" => operation.to_string(),
        "outcome" => outcome
    )
    .record(elapsed);
}
