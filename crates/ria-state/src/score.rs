//! # Scorer
//!
//! Pure aggregation of an [`AnswerMap`] against a [`QuestionCatalog`].
//!
//! ## Algorithm
//!
//! 1. Count catalog questions whose recorded answer is `yes` → `answered_yes`.
//! 2. `score = 100 * answered_yes / total_questions`.
//! 3. `compliant_items = answered_yes`,
//!    `non_compliant_items = total_questions - answered_yes`.
//!
//! Unanswered and `no` both count as non-compliant. The session only
//! allows scoring after the completeness gate opens, so in practice every
//! non-compliant item was answered `no`.
//!
//! An empty catalog scores 0.0 with all counts zero.

use serde::Serialize;

use ria_core::{AnswerMap, Importance, Question, QuestionCatalog};

/// Aggregate statistics for a completed questionnaire.
///
/// Invariant: `compliant_items + non_compliant_items == total_questions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Percentage of catalog questions answered yes, in `[0, 100]`.
    pub score: f64,
    /// Number of catalog questions.
    pub total_questions: usize,
    /// Questions answered yes.
    pub compliant_items: usize,
    /// Questions not answered yes.
    pub non_compliant_items: usize,
    /// Per-importance counts, Critical first, for levels present in the catalog.
    pub by_importance: Vec<ImportanceTally>,
}

/// Compliant count for one importance level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportanceTally {
    /// The level being tallied.
    pub importance: Importance,
    /// Catalog questions at this level.
    pub total: usize,
    /// Of those, answered yes.
    pub compliant: usize,
}

impl ImportanceTally {
    /// Questions at this level not answered yes.
    pub fn non_compliant(&self) -> usize {
        self.total - self.compliant
    }
}

impl ResultSummary {
    /// Score rounded to one decimal place, e.g. `66.7`.
    pub fn score_display(&self) -> String {
        format!("{:.1}", self.score)
    }
}

/// Compute the result summary for `answers` against `catalog`.
pub fn score(answers: &AnswerMap, catalog: &QuestionCatalog) -> ResultSummary {
    let total_questions = catalog.len();
    let answered_yes = catalog.iter().filter(|q| is_compliant(answers, q)).count();

    let score = if total_questions == 0 {
        0.0
    } else {
        100.0 * answered_yes as f64 / total_questions as f64
    };

    let by_importance = Importance::all()
        .iter()
        .filter_map(|level| {
            let at_level: Vec<&Question> =
                catalog.iter().filter(|q| q.importance == *level).collect();
            if at_level.is_empty() {
                return None;
            }
            Some(ImportanceTally {
                importance: *level,
                total: at_level.len(),
                compliant: at_level.iter().filter(|q| is_compliant(answers, q)).count(),
            })
        })
        .collect();

    ResultSummary {
        score,
        total_questions,
        compliant_items: answered_yes,
        non_compliant_items: total_questions - answered_yes,
        by_importance,
    }
}

/// Catalog questions not answered yes, in catalog order.
pub fn non_compliant_questions<'a>(
    answers: &AnswerMap,
    catalog: &'a QuestionCatalog,
) -> Vec<&'a Question> {
    catalog.iter().filter(|q| !is_compliant(answers, q)).collect()
}

fn is_compliant(answers: &AnswerMap, question: &Question) -> bool {
    answers.get(question.id).is_some_and(|r| r.is_compliant())
}
