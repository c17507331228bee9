//! # Responses and the Answer Map
//!
//! `Response` is the closed yes/no vocabulary. `AnswerMap` is the
//! per-session store from question id to response. Entries can be
//! overwritten but are never removed.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RiaError;
use crate::identity::QuestionId;

/// A yes/no answer to a compliance question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Response {
    /// The firm meets the requirement.
    Yes,
    /// The firm does not meet the requirement.
    No,
}

impl Response {
    /// The lowercase identifier, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// Whether this response counts toward the compliance score.
    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Response {
    type Err = RiaError;

    /// Accepts `yes`/`no` and the `y`/`n` shorthands, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" => Ok(Self::No),
            _ => Err(RiaError::UnknownResponse(s.to_string())),
        }
    }
}

/// Answers recorded so far, keyed by question id.
///
/// Deserializes from a plain `{id: yes|no}` map, which is the answer-sheet
/// format replayed by `ria score`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, Response>);

impl AnswerMap {
    /// Create an empty answer map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an answer, returning the previous one.
    pub fn insert(&mut self, id: QuestionId, response: Response) -> Option<Response> {
        self.0.insert(id, response)
    }

    /// The recorded answer for `id`, if any.
    pub fn get(&self, id: QuestionId) -> Option<Response> {
        self.0.get(&id).copied()
    }

    /// Whether `id` has an answer.
    pub fn contains(&self, id: QuestionId) -> bool {
        self.0.contains_key(&id)
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate answers ordered by question id.
    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Response)> + '_ {
        self.0.iter().map(|(id, r)| (*id, *r))
    }
}

impl FromIterator<(QuestionId, Response)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Response)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
