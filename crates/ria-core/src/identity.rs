//! # Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces in the questionnaire.
//! You cannot pass a `SessionId` where a `QuestionId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a catalog question.
///
/// Serializes transparently as its integer so catalog and answer-sheet
/// files can write `id: 2` or `2: yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

/// Unique identifier for one questionnaire session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl std::str::FromStr for QuestionId {
    type Err = std::num::ParseIntError;

    /// Accepts the bare number or the displayed `Q` form (`2`, `Q2`, `q2`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix('Q')
            .or_else(|| s.strip_prefix('q'))
            .unwrap_or(s);
        digits.parse().map(Self)
    }
}

impl SessionId {
    /// Generate a new random session identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session:{}", self.0)
    }
}
