//! Raia Core
//!
//! Core types, traits, and utilities shared across Raia components.
//!
//! This crate provides:
//! - Common types for report drafts, departments, and classification results
//! - Error types and result handling
//!
//! The classification engine built on top of these types is advisory only:
//! the reporting backend performs its own authoritative triage, and nothing
//! in a [`Classification`] may be treated as ground truth.

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    Classification, ClassificationSource, ConfidenceBand, Department, ReportDraft,
    CONFIDENCE_CEILING, CONFIDENCE_FLOOR, VERIFIED_THRESHOLD,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        Classification, ClassificationSource, ConfidenceBand, Department, ReportDraft,
    };
}
