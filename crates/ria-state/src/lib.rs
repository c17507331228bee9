//! # ria-state — Questionnaire Session State Machine
//!
//! Holds everything that changes while a user takes the compliance test.
//! All mutation flows through [`Session::dispatch`], a reducer over explicit
//! [`Action`] messages, so the state machine can be exercised without any
//! rendering layer.
//!
//! ## Components
//!
//! - **View** (`view.rs`): `Questionnaire ⇄ Results` with a transition log.
//!
//! - **Score** (`score.rs`): pure aggregation of an answer map against a
//!   catalog into a `ResultSummary`.
//!
//! - **Session** (`session.rs`): the session-scoped context object. Owns the
//!   catalog, answers, view, and step cursor. Enforces the completeness gate
//!   and rejects answers for ids outside the catalog.
//!
//! ## Transitions
//!
//! ```text
//!                 submit() [all questions answered]
//! Questionnaire ─────────────────────────────────────▶ Results
//!       ▲                                                 │
//!       └──────────────── review() ───────────────────────┘
//!                    (answers preserved)
//! ```

pub mod score;
pub mod session;
pub mod view;

pub use score::{non_compliant_questions, score, ImportanceTally, ResultSummary};
pub use session::{Action, Outcome, Session, SessionError};
pub use view::{ViewState, ViewTransitionRecord};
