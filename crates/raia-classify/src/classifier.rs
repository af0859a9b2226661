//! Classifier trait

use async_trait::async_trait;
use raia_core::{Classification, ReportDraft, Result};

/// Trait for all report classifiers
///
/// Implementations must be deterministic for a fixed draft. Callers must not
/// assume synchronous completion: the local heuristic resolves immediately,
/// but the same seam may be backed by a network call.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given report draft
    async fn classify(&self, draft: &ReportDraft) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}
