//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! parser / dispatcher / scroll store produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, gauges)
//! ```
//!
//! # Design Decisions
//! - Structured fields (url, path, route, reason) rather than formatted text
//! - Metrics are cheap and safe to record without an installed recorder

pub mod logging;
pub mod metrics;
