//! # Error Types
//!
//! Errors raised while building or loading a question catalog and while
//! parsing user-facing vocabulary (importance levels, responses). All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.

use thiserror::Error;

use crate::identity::QuestionId;

/// Top-level error type for the core data model.
#[derive(Error, Debug)]
pub enum RiaError {
    /// Two catalog entries share the same question id.
    #[error("duplicate question id {0} in catalog")]
    DuplicateQuestion(QuestionId),

    /// A catalog file declared no questions.
    #[error("question catalog is empty")]
    EmptyCatalog,

    /// A catalog entry failed validation.
    #[error("invalid question {id}: {reason}")]
    InvalidQuestion {
        /// The offending question.
        id: QuestionId,
        /// Why it was rejected.
        reason: String,
    },

    /// An importance level outside Critical/High/Medium/Low.
    #[error("unknown importance level: {0:?}")]
    UnknownImportance(String),

    /// A response other than yes/no.
    #[error("unknown response {0:?}; expected yes or no")]
    UnknownResponse(String),

    /// Catalog YAML could not be parsed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
