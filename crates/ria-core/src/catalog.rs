//! # Question Catalog
//!
//! The static, ordered list of compliance questions a session presents.
//! A catalog is built once at start-up, either from the built-in RIA
//! questions or from a YAML file, and is never mutated afterwards.
//!
//! ## File Format
//!
//! ```yaml
//! questions:
//!   - id: 1
//!     question: Does your firm have written policies and procedures?
//!     category: Documentation
//!     importance: Critical
//! ```
//!
//! The file loader is stricter than [`QuestionCatalog::new`]: it also
//! rejects an empty question list and blank prompt text.

use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiaError;
use crate::identity::QuestionId;

// ─── Importance ──────────────────────────────────────────────────────

/// How much a compliance item matters to an examiner.
///
/// Variant order is severity order, so sorting ascending yields
/// Critical first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Importance {
    /// Failure is a direct regulatory violation.
    Critical,
    /// Failure is likely to be cited in an examination.
    High,
    /// Expected practice.
    Medium,
    /// Good hygiene.
    Low,
}

impl Importance {
    /// All importance levels in severity order.
    pub fn all() -> &'static [Importance] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    /// The display name, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Importance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Importance {
    type Err = RiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Critical" => Ok(Self::Critical),
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            other => Err(RiaError::UnknownImportance(other.to_string())),
        }
    }
}

// ─── Question ────────────────────────────────────────────────────────

/// A single yes/no compliance check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable identifier, unique within a catalog.
    pub id: QuestionId,
    /// Prompt text shown to the user.
    pub question: String,
    /// Grouping label (e.g. "Documentation").
    pub category: String,
    /// Severity of a "no" answer.
    pub importance: Importance,
}

impl Question {
    /// Create a question.
    pub fn new(
        id: u32,
        question: impl Into<String>,
        category: impl Into<String>,
        importance: Importance,
    ) -> Self {
        Self {
            id: QuestionId(id),
            question: question.into(),
            category: category.into(),
            importance,
        }
    }
}

// ─── Catalog ─────────────────────────────────────────────────────────

/// An ordered, immutable list of questions with unique ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionCatalog {
    questions: Vec<Question>,
}

/// On-disk shape of a catalog, validated before it becomes a `QuestionCatalog`.
#[derive(Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

impl QuestionCatalog {
    /// Build a catalog, rejecting duplicate ids.
    ///
    /// An empty list is accepted; scoring an empty catalog yields 0.
    pub fn new(questions: Vec<Question>) -> Result<Self, RiaError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for q in &questions {
            if !seen.insert(q.id) {
                return Err(RiaError::DuplicateQuestion(q.id));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in RIA compliance questions.
    pub fn builtin() -> Self {
        Self {
            questions: vec![
                Question::new(
                    1,
                    "Does your firm have written policies and procedures?",
                    "Documentation",
                    Importance::Critical,
                ),
                Question::new(
                    2,
                    "Is your Form ADV up to date and filed within required deadlines?",
                    "Regulatory Filings",
                    Importance::Critical,
                ),
                Question::new(
                    3,
                    "Do you maintain records of all client transactions and communications?",
                    "Record Keeping",
                    Importance::High,
                ),
            ],
        }
    }

    /// Parse and validate a catalog from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, RiaError> {
        let file: CatalogFile = serde_yaml::from_str(text)?;
        if file.questions.is_empty() {
            return Err(RiaError::EmptyCatalog);
        }
        for q in &file.questions {
            if q.question.trim().is_empty() {
                return Err(RiaError::InvalidQuestion {
                    id: q.id,
                    reason: "question text is blank".to_string(),
                });
            }
        }
        Self::new(file.questions)
    }

    /// Load and validate a catalog from a YAML file.
    pub fn load(path: &Path) -> Result<Self, RiaError> {
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), questions = catalog.len(), "loaded question catalog");
        Ok(catalog)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the catalog has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Iterate questions in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    /// Look up a question by id.
    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Whether `id` names a catalog question.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.get(id).is_some()
    }

    /// Question ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.questions.iter().map(|q| q.id)
    }

    /// Index of `id` in catalog order.
    pub fn position(&self, id: QuestionId) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Question at `index` in catalog order.
    pub fn at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a QuestionCatalog {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
