//! # ria-core — Foundational Types for the RIA Compliance Questionnaire
//!
//! Defines the data model the rest of the workspace is built on: the
//! immutable question catalog, the yes/no response type, the answer map a
//! session accumulates, and the identifier newtypes that tie them together.
//! Every other crate in the workspace depends on `ria-core`; it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype identifiers.** `QuestionId` and `SessionId` are distinct
//!    types. A bare `u32` is never accepted where a question is meant.
//!
//! 2. **Closed vocabularies.** `Importance` and `Response` are enums with
//!    exhaustive `match` everywhere. There is no string-typed "yes".
//!
//! 3. **Immutable catalog.** A `QuestionCatalog` is built once, validated
//!    at construction (unique ids), and exposes no mutation.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `ria-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod answer;
pub mod catalog;
pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use answer::{AnswerMap, Response};
pub use catalog::{Importance, Question, QuestionCatalog};
pub use error::RiaError;
pub use identity::{QuestionId, SessionId};
pub use temporal::Timestamp;
