//! Department keyword catalog
//!
//! The catalog maps department display names to keyword lexicons. A built-in
//! hand-curated table covers the standard county departments; deployments
//! with different department structures can load their own from YAML.

use raia_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Keyword lexicon for a single department
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentKeywords {
    /// Department display name
    pub name: String,

    /// Keywords matched as case-insensitive substrings of the report text
    pub keywords: Vec<String>,
}

/// A complete department → keywords mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCatalog {
    /// Departments in priority order; earlier entries win exact score ties
    pub departments: Vec<DepartmentKeywords>,
}

impl KeywordCatalog {
    /// Load a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let catalog: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse keyword catalog: {e}")))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check catalog invariants: at least one department, every department
    /// named, every keyword list non-empty with non-blank entries
    pub fn validate(&self) -> Result<()> {
        if self.departments.is_empty() {
            return Err(Error::config("keyword catalog has no departments"));
        }

        for dept in &self.departments {
            if dept.name.trim().is_empty() {
                return Err(Error::config("department with empty name"));
            }
            if dept.keywords.is_empty() {
                return Err(Error::config(format!(
                    "department '{}' has no keywords",
                    dept.name
                )));
            }
            if dept.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::config(format!(
                    "department '{}' has a blank keyword",
                    dept.name
                )));
            }
        }

        Ok(())
    }

    /// Number of departments in the catalog
    pub fn len(&self) -> usize {
        self.departments.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// The built-in hand-curated catalog for the standard county departments.
    ///
    /// Some terms deliberately appear under more than one department
    /// ("market" serves both Agriculture and Trade and Industry); the
    /// classifier's ratio-then-count scoring resolves the overlap.
    pub fn builtin() -> Self {
        fn dept(name: &str, keywords: &[&str]) -> DepartmentKeywords {
            DepartmentKeywords {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }

        Self {
            departments: vec![
                dept(
                    "Health",
                    &[
                        "hospital",
                        "clinic",
                        "doctor",
                        "nurse",
                        "medicine",
                        "disease",
                        "malaria",
                        "ambulance",
                        "maternity",
                        "dispensary",
                        "vaccination",
                    ],
                ),
                dept(
                    "Education",
                    &[
                        "school",
                        "teacher",
                        "classroom",
                        "student",
                        "bursary",
                        "examination",
                        "library",
                        "tuition",
                        "textbook",
                        "pupil",
                    ],
                ),
                dept(
                    "Roads and Transport",
                    &[
                        "road",
                        "pothole",
                        "traffic",
                        "accident",
                        "bridge",
                        "transport",
                        "highway",
                        "roundabout",
                        "matatu",
                        "street",
                        "avenue",
                    ],
                ),
                dept(
                    "Environment and Water",
                    &[
                        "water",
                        "sewage",
                        "garbage",
                        "pollution",
                        "drainage",
                        "sanitation",
                        "borehole",
                        "river",
                        "dumping",
                        "litter",
                        "deforestation",
                    ],
                ),
                dept(
                    "Security",
                    &[
                        "police",
                        "theft",
                        "robbery",
                        "crime",
                        "insecurity",
                        "violence",
                        "gang",
                        "mugging",
                        "vandalism",
                        "patrol",
                    ],
                ),
                dept(
                    "Agriculture",
                    &[
                        "farm",
                        "crop",
                        "livestock",
                        "irrigation",
                        "fertilizer",
                        "pesticide",
                        "harvest",
                        "veterinary",
                        "dairy",
                        "market",
                    ],
                ),
                dept(
                    "Housing and Urban Planning",
                    &[
                        "housing",
                        "settlement",
                        "construction",
                        "building",
                        "zoning",
                        "eviction",
                        "slum",
                        "demolition",
                        "encroachment",
                        "plot",
                    ],
                ),
                dept(
                    "Trade and Industry",
                    &[
                        "market",
                        "trader",
                        "business",
                        "license",
                        "vendor",
                        "stall",
                        "hawker",
                        "industry",
                        "factory",
                        "cooperative",
                    ],
                ),
                dept(
                    "Finance and Economic Planning",
                    &[
                        "budget",
                        "taxation",
                        "revenue",
                        "levy",
                        "audit",
                        "procurement",
                        "salary",
                        "pension",
                        "allocation",
                        "disbursement",
                    ],
                ),
                dept(
                    "Public Service",
                    &[
                        "recruitment",
                        "employment",
                        "corruption",
                        "bribery",
                        "payroll",
                        "absenteeism",
                        "huduma",
                        "staffing",
                        "promotion",
                        "transfer",
                    ],
                ),
                dept(
                    "ICT and Innovation",
                    &[
                        "internet",
                        "wifi",
                        "network",
                        "digital",
                        "computer",
                        "website",
                        "innovation",
                        "software",
                        "broadband",
                        "cyber",
                    ],
                ),
            ],
        }
    }
}
