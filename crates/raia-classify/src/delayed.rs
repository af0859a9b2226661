//! Latency-simulating classifier decorator

use crate::classifier::Classifier;
use raia_core::{Classification, ReportDraft, Result};
use std::time::Duration;

/// Wraps a classifier with a fixed artificial delay.
///
/// The local heuristic resolves in microseconds; a server-assisted
/// deployment would not. Wrapping the heuristic in a delay keeps callers
/// honest about the asynchronous contract without standing up a backend.
pub struct DelayedClassifier<C> {
    inner: C,
    delay: Duration,
}

impl<C: Classifier> DelayedClassifier<C> {
    /// Wrap `inner`, sleeping for `delay` before each classification
    pub fn new(inner: C, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait::async_trait]
impl<C: Classifier> Classifier for DelayedClassifier<C> {
    async fn classify(&self, draft: &ReportDraft) -> Result<Classification> {
        tokio::time::sleep(self.delay).await;
        self.inner.classify(draft).await
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
