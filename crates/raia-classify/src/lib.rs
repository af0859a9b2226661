//! Raia Classifiers
//!
//! Heuristic classification of free-text citizen reports onto county
//! departments.
//!
//! The only classifier shipped today is [`DepartmentClassifier`], a
//! keyword-frequency heuristic over a hand-curated catalog. It is advisory:
//! results carry a [`ClassificationSource`](raia_core::ClassificationSource)
//! provenance tag and must never be treated as authoritative. The
//! [`Classifier`] trait is async so a server-backed model can be swapped in
//! behind the same seam.

pub mod catalog;
pub mod classifier;
pub mod delayed;
pub mod department;

pub use catalog::{DepartmentKeywords, KeywordCatalog};
pub use classifier::Classifier;
pub use delayed::DelayedClassifier;
pub use department::DepartmentClassifier;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::catalog::KeywordCatalog;
    pub use crate::classifier::Classifier;
    pub use crate::delayed::DelayedClassifier;
    pub use crate::department::DepartmentClassifier;
}
