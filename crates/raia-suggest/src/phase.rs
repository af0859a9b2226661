//! Suggestion lifecycle phases

use serde::{Deserialize, Serialize};

/// Where a form session currently sits in the suggestion lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionPhase {
    /// Watching input; no analysis in flight; suggestions permitted
    Idle,

    /// A content change was observed; the quiet-period timer is running
    Debouncing,

    /// Quiet period elapsed; classification in progress; panel shows a
    /// loading affordance
    Analyzing,

    /// Classification returned; panel shows the result and action buttons
    Suggested,

    /// User picked a department or turned suggestions off; nothing runs
    /// regardless of input changes
    Disabled,
}
