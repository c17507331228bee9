//! # Questionnaire Session
//!
//! The session-scoped context object. A `Session` owns the catalog, the
//! answer map, the current view, and the step cursor, and changes them only
//! through the transition methods below or the [`Session::dispatch`]
//! reducer.
//!
//! ## Rules
//!
//! - Answers are recorded only in the `Questionnaire` view, and only for
//!   ids present in the catalog.
//! - `submit()` requires every catalog question to have an answer.
//! - `review()` returns to the questionnaire without touching the answers.
//! - A rejected action leaves the session unchanged.

use thiserror::Error;

use ria_core::{AnswerMap, Question, QuestionCatalog, QuestionId, Response, SessionId, Timestamp};

use crate::score::{score, ResultSummary};
use crate::view::{ViewState, ViewTransitionRecord};

// ─── Actions ─────────────────────────────────────────────────────────

/// A discrete user input, as produced by a button press or typed command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The user picked yes or no for a question.
    AnswerRecorded {
        /// Question being answered.
        question_id: QuestionId,
        /// The chosen response.
        response: Response,
    },
    /// The user pressed "Submit Test".
    Submitted,
    /// The user pressed "Review Answers".
    ReviewRequested,
    /// Move focus to the next question.
    FocusNext,
    /// Move focus to the previous question.
    FocusPrevious,
}

impl Action {
    /// Short verb used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AnswerRecorded { .. } => "record an answer",
            Self::Submitted => "submit",
            Self::ReviewRequested => "review answers",
            Self::FocusNext | Self::FocusPrevious => "move focus",
        }
    }
}

/// What a successfully dispatched action changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An answer was inserted or overwritten.
    AnswerRecorded {
        /// The question answered.
        question_id: QuestionId,
        /// The answer it replaced, if any.
        previous: Option<Response>,
    },
    /// The session moved between views.
    ViewChanged {
        /// View before.
        from: ViewState,
        /// View after.
        to: ViewState,
    },
    /// The step cursor moved (or was already at the edge).
    FocusMoved {
        /// New cursor position.
        step: usize,
    },
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Reasons an action is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The question id is not in the catalog.
    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),

    /// Submission attempted before every question was answered.
    #[error("cannot submit: {answered} of {total} questions answered")]
    Incomplete {
        /// Catalog questions with an answer.
        answered: usize,
        /// Catalog size.
        total: usize,
    },

    /// The action does not apply to the current view.
    #[error("cannot {action} in {from} view")]
    InvalidTransition {
        /// Current view.
        from: ViewState,
        /// What was attempted.
        action: &'static str,
    },
}

// ─── Session ─────────────────────────────────────────────────────────

/// One user's pass through the questionnaire.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    catalog: QuestionCatalog,
    answers: AnswerMap,
    view: ViewState,
    step: usize,
    transitions: Vec<ViewTransitionRecord>,
}

impl Session {
    /// Start a session over `catalog` in the questionnaire view.
    pub fn new(catalog: QuestionCatalog) -> Self {
        let session = Self {
            id: SessionId::new(),
            catalog,
            answers: AnswerMap::new(),
            view: ViewState::Questionnaire,
            step: 0,
            transitions: Vec::new(),
        };
        tracing::info!(
            session_id = %session.id,
            questions = session.catalog.len(),
            "questionnaire session started"
        );
        session
    }

    /// Apply `action`, returning what changed.
    ///
    /// On error the session is left exactly as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, SessionError> {
        let result = match action {
            Action::AnswerRecorded {
                question_id,
                response,
            } => self
                .record_answer(question_id, response)
                .map(|previous| Outcome::AnswerRecorded {
                    question_id,
                    previous,
                }),
            Action::Submitted => self.submit().map(|_| Outcome::ViewChanged {
                from: ViewState::Questionnaire,
                to: ViewState::Results,
            }),
            Action::ReviewRequested => self.review().map(|_| Outcome::ViewChanged {
                from: ViewState::Results,
                to: ViewState::Questionnaire,
            }),
            Action::FocusNext => self.focus_next().map(|step| Outcome::FocusMoved { step }),
            Action::FocusPrevious => self
                .focus_previous()
                .map(|step| Outcome::FocusMoved { step }),
        };

        match &result {
            Ok(outcome) => {
                tracing::debug!(session_id = %self.id, action = action.name(), ?outcome, "action applied")
            }
            Err(e) => {
                tracing::warn!(session_id = %self.id, action = action.name(), error = %e, "action rejected")
            }
        }
        result
    }

    /// Insert or overwrite the answer for `question_id`.
    ///
    /// Returns the previous answer. If the answered question is the focused
    /// one, focus advances to the next question.
    pub fn record_answer(
        &mut self,
        question_id: QuestionId,
        response: Response,
    ) -> Result<Option<Response>, SessionError> {
        self.require_view(
            ViewState::Questionnaire,
            Action::AnswerRecorded {
                question_id,
                response,
            },
        )?;
        let position = self
            .catalog
            .position(question_id)
            .ok_or(SessionError::UnknownQuestion(question_id))?;

        let previous = self.answers.insert(question_id, response);
        if position == self.step {
            self.step = self.clamp_step(self.step + 1);
        }
        Ok(previous)
    }

    /// Move from the questionnaire to the results view.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        self.require_view(ViewState::Questionnaire, Action::Submitted)?;
        if !self.can_submit() {
            return Err(SessionError::Incomplete {
                answered: self.answered_count(),
                total: self.catalog.len(),
            });
        }
        self.do_transition(ViewState::Results);

        let summary = self.results();
        tracing::info!(
            session_id = %self.id,
            score = summary.score,
            compliant = summary.compliant_items,
            non_compliant = summary.non_compliant_items,
            "questionnaire submitted"
        );
        Ok(())
    }

    /// Return from the results view to the questionnaire, keeping answers.
    pub fn review(&mut self) -> Result<(), SessionError> {
        self.require_view(ViewState::Results, Action::ReviewRequested)?;
        self.do_transition(ViewState::Questionnaire);
        Ok(())
    }

    /// Focus the next question, stopping at the last one.
    pub fn focus_next(&mut self) -> Result<usize, SessionError> {
        self.require_view(ViewState::Questionnaire, Action::FocusNext)?;
        self.step = self.clamp_step(self.step + 1);
        Ok(self.step)
    }

    /// Focus the previous question, stopping at the first one.
    pub fn focus_previous(&mut self) -> Result<usize, SessionError> {
        self.require_view(ViewState::Questionnaire, Action::FocusPrevious)?;
        self.step = self.step.saturating_sub(1);
        Ok(self.step)
    }

    /// Whether the completeness gate is open: every catalog id has an answer.
    pub fn can_submit(&self) -> bool {
        self.catalog.ids().all(|id| self.answers.contains(id))
    }

    /// Number of catalog questions with an answer.
    pub fn answered_count(&self) -> usize {
        self.catalog
            .ids()
            .filter(|id| self.answers.contains(*id))
            .count()
    }

    /// Current score summary. Available in either view.
    pub fn results(&self) -> ResultSummary {
        score(&self.answers, &self.catalog)
    }

    /// The session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The catalog this session presents.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The current view.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Index of the focused question.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The focused question, if the catalog is non-empty.
    pub fn focused_question(&self) -> Option<&Question> {
        self.catalog.at(self.step)
    }

    /// Ordered log of view transitions.
    pub fn transitions(&self) -> &[ViewTransitionRecord] {
        &self.transitions
    }

    fn require_view(&self, expected: ViewState, action: Action) -> Result<(), SessionError> {
        if self.view != expected {
            return Err(SessionError::InvalidTransition {
                from: self.view,
                action: action.name(),
            });
        }
        Ok(())
    }

    fn clamp_step(&self, step: usize) -> usize {
        step.min(self.catalog.len().saturating_sub(1))
    }

    fn do_transition(&mut self, to: ViewState) {
        let timestamp = Timestamp::now();
        tracing::info!(
            session_id = %self.id,
            from = %self.view,
            to = %to,
            at = %timestamp,
            "view transition"
        );
        self.transitions.push(ViewTransitionRecord {
            from: self.view,
            to,
            timestamp,
        });
        self.view = to;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(QuestionCatalog::builtin())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(id: u32, response: Response) -> Action {
        Action::AnswerRecorded {
            question_id: QuestionId(id),
            response,
        }
    }

    fn make_complete_session(responses: [Response; 3]) -> Session {
        let mut session = Session::default();
        for (i, r) in responses.into_iter().enumerate() {
            session.dispatch(answer(i as u32 + 1, r)).unwrap();
        }
        session
    }

    // ── Initial state ────────────────────────────────────────────────

    #[test]
    fn test_new_session_starts_in_questionnaire() {
        let session = Session::default();
        assert_eq!(session.view(), ViewState::Questionnaire);
        assert!(session.answers().is_empty());
        assert_eq!(session.step(), 0);
        assert!(!session.can_submit());
        assert!(session.transitions().is_empty());
    }

    // ── Answer recording ─────────────────────────────────────────────

    #[test]
    fn test_record_answer_inserts() {
        let mut session = Session::default();
        let outcome = session.dispatch(answer(2, Response::Yes)).unwrap();
        assert_eq!(
            outcome,
            Outcome::AnswerRecorded {
                question_id: QuestionId(2),
                previous: None
            }
        );
        assert_eq!(session.answers().get(QuestionId(2)), Some(Response::Yes));
    }

    #[test]
    fn test_record_answer_overwrites() {
        let mut session = Session::default();
        session.dispatch(answer(1, Response::Yes)).unwrap();
        let outcome = session.dispatch(answer(1, Response::No)).unwrap();
        assert_eq!(
            outcome,
            Outcome::AnswerRecorded {
                question_id: QuestionId(1),
                previous: Some(Response::Yes)
            }
        );
        assert_eq!(session.answers().get(QuestionId(1)), Some(Response::No));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_record_same_answer_twice_is_idempotent() {
        let mut once = Session::default();
        once.dispatch(answer(1, Response::Yes)).unwrap();
        let mut twice = Session::default();
        twice.dispatch(answer(1, Response::Yes)).unwrap();
        twice.dispatch(answer(1, Response::Yes)).unwrap();
        assert_eq!(once.answers(), twice.answers());
    }

    #[test]
    fn test_unknown_question_rejected_and_state_unchanged() {
        let mut session = Session::default();
        let err = session.dispatch(answer(42, Response::Yes)).unwrap_err();
        assert_eq!(err, SessionError::UnknownQuestion(QuestionId(42)));
        assert!(session.answers().is_empty());
        assert_eq!(session.step(), 0);
    }

    #[test]
    fn test_unknown_ids_cannot_satisfy_gate() {
        let mut session = Session::default();
        session.dispatch(answer(1, Response::Yes)).unwrap();
        session.dispatch(answer(2, Response::Yes)).unwrap();
        assert!(session.dispatch(answer(99, Response::Yes)).is_err());
        assert!(!session.can_submit());
        assert!(matches!(
            session.dispatch(Action::Submitted),
            Err(SessionError::Incomplete { answered: 2, total: 3 })
        ));
    }

    // ── Submission gate ──────────────────────────────────────────────

    #[test]
    fn test_submit_blocked_until_complete() {
        let mut session = Session::default();
        for id in 1..=2 {
            session.dispatch(answer(id, Response::Yes)).unwrap();
            assert!(!session.can_submit());
        }
        session.dispatch(answer(3, Response::No)).unwrap();
        assert!(session.can_submit());
    }

    #[test]
    fn test_incomplete_submit_leaves_view() {
        let mut session = Session::default();
        session.dispatch(answer(1, Response::Yes)).unwrap();
        let err = session.dispatch(Action::Submitted).unwrap_err();
        assert_eq!(err, SessionError::Incomplete { answered: 1, total: 3 });
        assert_eq!(session.view(), ViewState::Questionnaire);
        assert!(session.transitions().is_empty());
    }

    #[test]
    fn test_submit_moves_to_results() {
        let mut session = make_complete_session([Response::Yes, Response::Yes, Response::No]);
        let outcome = session.dispatch(Action::Submitted).unwrap();
        assert_eq!(
            outcome,
            Outcome::ViewChanged {
                from: ViewState::Questionnaire,
                to: ViewState::Results
            }
        );
        assert_eq!(session.view(), ViewState::Results);
        let summary = session.results();
        assert_eq!(summary.score_display(), "66.7");
        assert_eq!(summary.compliant_items, 2);
        assert_eq!(summary.non_compliant_items, 1);
    }

    #[test]
    fn test_all_no_scenario() {
        let mut session = make_complete_session([Response::No, Response::No, Response::No]);
        session.submit().unwrap();
        let summary = session.results();
        assert_eq!(summary.score_display(), "0.0");
        assert_eq!(summary.compliant_items, 0);
        assert_eq!(summary.non_compliant_items, 3);
    }

    #[test]
    fn test_cannot_submit_twice() {
        let mut session = make_complete_session([Response::Yes; 3]);
        session.submit().unwrap();
        assert_eq!(
            session.submit().unwrap_err(),
            SessionError::InvalidTransition {
                from: ViewState::Results,
                action: "submit"
            }
        );
    }

    // ── Review ───────────────────────────────────────────────────────

    #[test]
    fn test_review_preserves_answers() {
        let mut session = make_complete_session([Response::Yes, Response::No, Response::Yes]);
        let before = session.answers().clone();
        session.dispatch(Action::Submitted).unwrap();
        session.dispatch(Action::ReviewRequested).unwrap();
        assert_eq!(session.view(), ViewState::Questionnaire);
        assert_eq!(session.answers(), &before);
        assert!(session.can_submit());
    }

    #[test]
    fn test_review_then_edit_then_resubmit() {
        let mut session = make_complete_session([Response::No, Response::No, Response::No]);
        session.submit().unwrap();
        session.review().unwrap();
        session.record_answer(QuestionId(2), Response::Yes).unwrap();
        session.submit().unwrap();
        assert_eq!(session.results().compliant_items, 1);
        assert_eq!(session.transitions().len(), 3);
    }

    #[test]
    fn test_review_from_questionnaire_rejected() {
        let mut session = Session::default();
        assert!(matches!(
            session.dispatch(Action::ReviewRequested),
            Err(SessionError::InvalidTransition { from: ViewState::Questionnaire, .. })
        ));
    }

    #[test]
    fn test_answers_rejected_in_results_view() {
        let mut session = make_complete_session([Response::Yes; 3]);
        session.submit().unwrap();
        let err = session.dispatch(answer(1, Response::No)).unwrap_err();
        assert!(matches!(err, SessionError::InvalidTransition { from: ViewState::Results, .. }));
        assert_eq!(session.answers().get(QuestionId(1)), Some(Response::Yes));
    }

    #[test]
    fn test_rejection_names_the_attempted_action() {
        let mut session = make_complete_session([Response::Yes; 3]);
        session.submit().unwrap();
        for action in [
            answer(1, Response::No),
            Action::Submitted,
            Action::FocusNext,
            Action::FocusPrevious,
        ] {
            let err = session.dispatch(action).unwrap_err();
            assert_eq!(
                err,
                SessionError::InvalidTransition {
                    from: ViewState::Results,
                    action: action.name(),
                }
            );
        }
        assert_eq!(
            session.dispatch(answer(2, Response::No)).unwrap_err().to_string(),
            "cannot record an answer in RESULTS view"
        );
    }

    #[test]
    fn test_transition_log_records_each_move() {
        let mut session = make_complete_session([Response::Yes; 3]);
        session.submit().unwrap();
        session.review().unwrap();
        let log = session.transitions();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].from, ViewState::Questionnaire);
        assert_eq!(log[0].to, ViewState::Results);
        assert_eq!(log[1].to, ViewState::Questionnaire);
        assert!(log[0].timestamp <= log[1].timestamp);
    }

    // ── Step cursor ──────────────────────────────────────────────────

    #[test]
    fn test_answering_focused_question_advances() {
        let mut session = Session::default();
        session.record_answer(QuestionId(1), Response::Yes).unwrap();
        assert_eq!(session.step(), 1);
        session.record_answer(QuestionId(3), Response::Yes).unwrap();
        assert_eq!(session.step(), 1);
        session.record_answer(QuestionId(2), Response::Yes).unwrap();
        assert_eq!(session.step(), 2);
        session.record_answer(QuestionId(3), Response::No).unwrap();
        assert_eq!(session.step(), 2);
    }

    #[test]
    fn test_focus_clamps_at_edges() {
        let mut session = Session::default();
        assert_eq!(session.dispatch(Action::FocusPrevious).unwrap(), Outcome::FocusMoved { step: 0 });
        session.focus_next().unwrap();
        session.focus_next().unwrap();
        assert_eq!(session.focus_next().unwrap(), 2);
        assert_eq!(session.focused_question().map(|q| q.id), Some(QuestionId(3)));
    }

    #[test]
    fn test_focus_rejected_in_results_view() {
        let mut session = make_complete_session([Response::Yes; 3]);
        session.submit().unwrap();
        assert!(session.dispatch(Action::FocusNext).is_err());
    }

    // ── Empty catalog ────────────────────────────────────────────────

    #[test]
    fn test_empty_catalog_session() {
        let mut session = Session::new(QuestionCatalog::new(Vec::new()).unwrap());
        assert!(session.focused_question().is_none());
        assert_eq!(session.focus_next().unwrap(), 0);
        assert!(session.can_submit());
        session.submit().unwrap();
        assert_eq!(session.results().score, 0.0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            SessionError::Incomplete { answered: 1, total: 3 }.to_string(),
            "cannot submit: 1 of 3 questions answered"
        );
        assert_eq!(
            SessionError::InvalidTransition {
                from: ViewState::Results,
                action: "submit"
            }
            .to_string(),
            "cannot submit in RESULTS view"
        );
        assert_eq!(
            SessionError::UnknownQuestion(QuestionId(9)).to_string(),
            "unknown question Q9"
        );
    }
}
