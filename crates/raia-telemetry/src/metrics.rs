//! Metrics collection and reporting

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for the suggestion lifecycle
#[derive(Clone, Default)]
pub struct SuggestionMetrics {
    inner: Arc<MetricsInner>,
}

#[derive(Default)]
struct MetricsInner {
    analyses_started: AtomicU64,
    analyses_completed: AtomicU64,
    analyses_failed: AtomicU64,
    auto_applied: AtomicU64,
    manually_applied: AtomicU64,
    dismissed: AtomicU64,
    classifier_latency_us: AtomicU64,
}

impl SuggestionMetrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the start of a classification run
    pub fn record_analysis_started(&self) {
        self.inner.analyses_started.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed classification and its latency
    pub fn record_analysis_completed(&self, latency_us: u64) {
        self.inner.analyses_completed.fetch_add(1, Ordering::Relaxed);
        self.inner
            .classifier_latency_us
            .fetch_add(latency_us, Ordering::Relaxed);
    }

    /// Record a classification failure
    pub fn record_analysis_failed(&self) {
        self.inner.analyses_failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an autonomous department write
    pub fn record_auto_applied(&self) {
        self.inner.auto_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a user accepting a suggestion via the apply action
    pub fn record_manually_applied(&self) {
        self.inner.manually_applied.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a user dismissing suggestions
    pub fn record_dismissed(&self) {
        self.inner.dismissed.fetch_add(1, Ordering::Relaxed);
    }

    /// Get a point-in-time snapshot of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        let completed = self.inner.analyses_completed.load(Ordering::Relaxed);
        let latency_total = self.inner.classifier_latency_us.load(Ordering::Relaxed);

        MetricsSnapshot {
            analyses_started: self.inner.analyses_started.load(Ordering::Relaxed),
            analyses_completed: completed,
            analyses_failed: self.inner.analyses_failed.load(Ordering::Relaxed),
            auto_applied: self.inner.auto_applied.load(Ordering::Relaxed),
            manually_applied: self.inner.manually_applied.load(Ordering::Relaxed),
            dismissed: self.inner.dismissed.load(Ordering::Relaxed),
            avg_classifier_latency_us: if completed > 0 {
                latency_total / completed
            } else {
                0
            },
        }
    }
}

/// Point-in-time view of the suggestion counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub analyses_started: u64,
    pub analyses_completed: u64,
    pub analyses_failed: u64,
    pub auto_applied: u64,
    pub manually_applied: u64,
    pub dismissed: u64,
    pub avg_classifier_latency_us: u64,
}
