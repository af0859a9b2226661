//! Keyword-frequency department classifier
//!
//! Scores every department in the catalog by the share of its lexicon found
//! in the report text. Ratio scoring favors a tight topical match; the
//! absolute-count tiebreak keeps departments with large lexicons from being
//! starved.

use crate::catalog::KeywordCatalog;
use crate::classifier::Classifier;
use aho_corasick::AhoCorasick;
use raia_core::{
    Classification, ClassificationSource, Error, ReportDraft, Result, CONFIDENCE_CEILING,
    CONFIDENCE_FLOOR, VERIFIED_THRESHOLD,
};
use std::time::Instant;

/// One compiled department lexicon
struct DepartmentMatcher {
    name: String,
    automaton: AhoCorasick,
    keyword_count: usize,
}

/// Heuristic classifier mapping report text onto a department
///
/// Deterministic and total: any pair of strings classifies, including empty
/// ones (those simply produce no prediction at floor confidence).
pub struct DepartmentClassifier {
    name: String,
    matchers: Vec<DepartmentMatcher>,
}

impl DepartmentClassifier {
    /// Create a classifier over the built-in catalog
    pub fn new() -> Result<Self> {
        Self::from_catalog(KeywordCatalog::builtin())
    }

    /// Create a classifier over a custom catalog
    pub fn from_catalog(catalog: KeywordCatalog) -> Result<Self> {
        catalog.validate()?;

        let matchers = catalog
            .departments
            .into_iter()
            .map(|dept| {
                let automaton = AhoCorasick::builder()
                    .ascii_case_insensitive(true)
                    .build(&dept.keywords)
                    .map_err(|e| {
                        Error::classifier(format!(
                            "failed to build matcher for '{}': {e}",
                            dept.name
                        ))
                    })?;

                Ok(DepartmentMatcher {
                    name: dept.name,
                    keyword_count: dept.keywords.len(),
                    automaton,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(departments = matchers.len(), "compiled department matchers");

        Ok(Self {
            name: "department-lexicon".to_string(),
            matchers,
        })
    }

    /// Find the best-scoring department for the given text.
    ///
    /// Winner has the highest matched-keyword ratio; ties fall to the higher
    /// absolute match count, then to catalog order.
    fn best_match(&self, text: &str) -> Option<(&str, usize)> {
        let mut best: Option<(&str, usize, f32)> = None;

        for matcher in &self.matchers {
            // Distinct keywords hit, not total occurrences. Overlapping
            // search so a keyword nested inside another keyword's match
            // still counts.
            let mut seen = vec![false; matcher.keyword_count];
            for m in matcher.automaton.find_overlapping_iter(text) {
                seen[m.pattern().as_usize()] = true;
            }
            let matches = seen.iter().filter(|hit| **hit).count();
            if matches == 0 {
                continue;
            }

            let ratio = matches as f32 / matcher.keyword_count as f32;
            let better = match best {
                None => true,
                Some((_, best_matches, best_ratio)) => {
                    ratio > best_ratio || (ratio == best_ratio && matches > best_matches)
                }
            };
            if better {
                best = Some((matcher.name.as_str(), matches, ratio));
            }
        }

        best.map(|(name, matches, _)| (name, matches))
    }

    /// The discrete confidence ladder. A step function rather than a
    /// continuous formula so downstream low/medium/high bands stay legible.
    fn confidence_for(match_count: usize) -> f32 {
        let confidence = match match_count {
            0 => CONFIDENCE_FLOOR,
            1 => 0.75,
            2 => 0.85,
            _ => 0.95,
        };
        confidence.clamp(CONFIDENCE_FLOOR, CONFIDENCE_CEILING)
    }
}

#[async_trait::async_trait]
impl Classifier for DepartmentClassifier {
    async fn classify(&self, draft: &ReportDraft) -> Result<Classification> {
        let start = Instant::now();

        let text = draft.combined_text();
        let (department, match_count) = match self.best_match(&text) {
            Some((name, matches)) => (Some(name.to_string()), matches),
            None => (None, 0),
        };

        let confidence = Self::confidence_for(match_count);

        Ok(Classification {
            department,
            confidence,
            match_count,
            verified: confidence > VERIFIED_THRESHOLD,
            source: ClassificationSource::LocalSimulation,
            latency_us: start.elapsed().as_micros() as u64,
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
