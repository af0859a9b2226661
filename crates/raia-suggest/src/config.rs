//! Suggestion controller configuration

use raia_core::{Error, ReportDraft, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the suggestion lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Quiet period after a passive typing change before analysis runs
    #[serde(default = "default_typing_debounce_ms")]
    pub typing_debounce_ms: u64,

    /// Shorter quiet period used when the user explicitly re-enables
    /// suggestions
    #[serde(default = "default_reenable_debounce_ms")]
    pub reenable_debounce_ms: u64,

    /// Minimum trimmed title length before analysis is attempted
    #[serde(default = "default_min_title_chars")]
    pub min_title_chars: usize,

    /// Minimum trimmed description length before analysis is attempted
    #[serde(default = "default_min_description_chars")]
    pub min_description_chars: usize,

    /// Confidence at or above which a result may auto-populate an empty
    /// department field
    #[serde(default = "default_auto_apply_threshold")]
    pub auto_apply_threshold: f32,
}

impl SuggestConfig {
    /// Load configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse suggest config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check configuration invariants
    pub fn validate(&self) -> Result<()> {
        if self.typing_debounce_ms == 0 || self.reenable_debounce_ms == 0 {
            return Err(Error::config("debounce periods must be non-zero"));
        }
        if self.min_title_chars == 0 || self.min_description_chars == 0 {
            return Err(Error::config("minimum content lengths must be non-zero"));
        }
        if !(0.0..=1.0).contains(&self.auto_apply_threshold) {
            return Err(Error::config(format!(
                "auto-apply threshold {} outside [0, 1]",
                self.auto_apply_threshold
            )));
        }
        Ok(())
    }

    /// Quiet period for passive typing-triggered analysis
    pub fn typing_debounce(&self) -> Duration {
        Duration::from_millis(self.typing_debounce_ms)
    }

    /// Quiet period for an explicit re-enable
    pub fn reenable_debounce(&self) -> Duration {
        Duration::from_millis(self.reenable_debounce_ms)
    }

    /// Whether the given input carries enough content to analyze
    pub fn qualifies(&self, title: &str, description: &str) -> bool {
        ReportDraft::new(title, description)
            .meets_minimum(self.min_title_chars, self.min_description_chars)
    }
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            typing_debounce_ms: default_typing_debounce_ms(),
            reenable_debounce_ms: default_reenable_debounce_ms(),
            min_title_chars: default_min_title_chars(),
            min_description_chars: default_min_description_chars(),
            auto_apply_threshold: default_auto_apply_threshold(),
        }
    }
}

fn default_typing_debounce_ms() -> u64 {
    2000
}

fn default_reenable_debounce_ms() -> u64 {
    500
}

fn default_min_title_chars() -> usize {
    3
}

fn default_min_description_chars() -> usize {
    10
}

fn default_auto_apply_threshold() -> f32 {
    0.7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuggestConfig::default();
        assert_eq!(config.typing_debounce_ms, 2000);
        assert_eq!(config.reenable_debounce_ms, 500);
        assert_eq!(config.min_title_chars, 3);
        assert_eq!(config.min_description_chars, 10);
        assert_eq!(config.auto_apply_threshold, 0.7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config = SuggestConfig::from_yaml("typing_debounce_ms: 1000").unwrap();
        assert_eq!(config.typing_debounce_ms, 1000);
        assert_eq!(config.reenable_debounce_ms, 500);
        assert_eq!(config.auto_apply_threshold, 0.7);
    }

    #[test]
    fn test_rejects_zero_debounce() {
        let err = SuggestConfig::from_yaml("typing_debounce_ms: 0").unwrap_err();
        assert!(err.to_string().contains("non-zero"));
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let err = SuggestConfig::from_yaml("auto_apply_threshold: 1.5").unwrap_err();
        assert!(err.to_string().contains("outside"));
    }

    #[test]
    fn test_qualifies_uses_trimmed_char_counts() {
        let config = SuggestConfig::default();
        assert!(!config.qualifies("Hi", "ok"));
        assert!(!config.qualifies("Hi there", "   short    "));
        assert!(config.qualifies("Pothole", "Road is damaged"));
    }
}
