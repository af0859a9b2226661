//! Core types for Raia

use serde::{Deserialize, Serialize};

/// Lower bound for heuristic confidence. Never 0: a keyword lexicon cannot
/// assert certainty about a miss any more than about a hit.
pub const CONFIDENCE_FLOOR: f32 = 0.3;

/// Upper bound for heuristic confidence. Never 1 for the same reason.
pub const CONFIDENCE_CEILING: f32 = 0.95;

/// Confidence above this value marks a classification as verified.
pub const VERIFIED_THRESHOLD: f32 = 0.6;

/// The free-text content of an in-progress citizen report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDraft {
    /// Short headline for the issue
    pub title: String,

    /// Free-text narrative describing the issue
    pub description: String,
}

impl ReportDraft {
    /// Create a new report draft
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// The text a classifier sees: title and description joined
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    /// Whether the draft carries enough content for classification to be
    /// meaningful. Counts trimmed characters, not bytes.
    pub fn meets_minimum(&self, min_title_chars: usize, min_description_chars: usize) -> bool {
        self.title.trim().chars().count() >= min_title_chars
            && self.description.trim().chars().count() >= min_description_chars
    }
}

/// A government department that can be assigned to a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Backend identifier for the department
    pub id: String,

    /// Display name, matched exactly against classifier predictions
    pub name: String,
}

impl Department {
    /// Create a new department record
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Provenance of a classification result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationSource {
    /// Produced by the local keyword heuristic
    LocalSimulation,

    /// Produced by a server-side model (reserved for a server-assisted mode)
    RemoteModel,
}

/// Result of classifying a report draft
///
/// Created fresh on every invocation and never mutated; a newer result
/// supersedes an older one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    /// Best-matching department name, or `None` when no keyword matched
    pub department: Option<String>,

    /// Heuristic confidence, clamped to `[CONFIDENCE_FLOOR, CONFIDENCE_CEILING]`
    pub confidence: f32,

    /// Distinct keyword hits backing the prediction
    pub match_count: usize,

    /// Whether confidence clears [`VERIFIED_THRESHOLD`]
    pub verified: bool,

    /// Where this result came from
    pub source: ClassificationSource,

    /// Classification time in microseconds
    pub latency_us: u64,
}

impl Classification {
    /// Check if confidence meets or exceeds a threshold
    pub fn exceeds_threshold(&self, threshold: f32) -> bool {
        self.confidence >= threshold
    }

    /// Coarse confidence band for display
    pub fn band(&self) -> ConfidenceBand {
        ConfidenceBand::from_confidence(self.confidence)
    }
}

/// Legible low/medium/high bands derived from the confidence ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceBand {
    Low,
    Medium,
    High,
}

impl ConfidenceBand {
    /// Map a confidence value onto a band
    pub fn from_confidence(confidence: f32) -> Self {
        if confidence > 0.8 {
            Self::High
        } else if confidence > VERIFIED_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}
