//! Metrics collection.
//!
//! # Metrics
//! - `deeplink_dispatch_total` (counter): dispatch attempts by outcome
//! - `deeplink_navigations_total` (counter): successful navigations by route
//! - `scroll_positions_stored` (gauge): entries in the scroll position store
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; no recorder installed means no-op
//! - Route labels come from the fixed route table, so cardinality is bounded

use metrics::{counter, gauge};

/// Outcome label for a successful dispatch.
pub const OUTCOME_NAVIGATED: &str = "navigated";

/// Record the outcome of one dispatch attempt.
pub fn record_dispatch(outcome: &'static str) {
    counter!("deeplink_dispatch_total", "outcome" => outcome).increment(1);
}

/// Record a navigation request accepted by the navigator.
pub fn record_navigation(route: &'static str) {
    counter!("deeplink_navigations_total", "route" => route).increment(1);
}

/// Record the current size of the scroll position store.
pub fn record_scroll_store_size(size: usize) {
    gauge!("scroll_positions_stored").set(size as f64);
}
