//! Raia Telemetry
//!
//! Lightweight counters for the suggestion lifecycle: how often analysis
//! runs, how it ends, and what users do with the results. Counters are
//! lock-free atomics shared across clones, cheap enough to record on every
//! event.

pub mod metrics;

pub use metrics::{MetricsSnapshot, SuggestionMetrics};
