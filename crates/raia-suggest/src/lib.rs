//! Raia Suggestion Controller
//!
//! Owns the policy for *when* the department classifier runs and *whether*
//! its output may touch the form's department field. One controller instance
//! exists per open report-creation form; it holds the enable/disable switch,
//! the debounce timer, the last-analyzed input fingerprint, and the
//! auto-apply gate.
//!
//! The controller never fights an explicit user choice: a manual department
//! selection disables analysis until the user clears the field or asks for
//! suggestions again, and a classification that settles after the user has
//! moved on is discarded rather than applied.

pub mod config;
pub mod controller;
pub mod phase;
pub mod sink;

pub use config::SuggestConfig;
pub use controller::{SuggestionController, SuggestionSnapshot};
pub use phase::SuggestionPhase;
pub use sink::SuggestionSink;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::SuggestConfig;
    pub use crate::controller::{SuggestionController, SuggestionSnapshot};
    pub use crate::phase::SuggestionPhase;
    pub use crate::sink::SuggestionSink;
}
