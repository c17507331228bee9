//! # ria-cli — RIA Compliance Test Command-Line Interface
//!
//! A terminal front end over the `ria-state` session machine. Typed
//! commands stand in for button presses; every one becomes an
//! [`ria_state::Action`] dispatched to the session reducer, and the current
//! view is re-rendered as text.
//!
//! ## Subcommands
//!
//! - `run` — Interactive questionnaire session on stdin/stdout
//! - `score` — Replay an answer sheet and print the results
//! - `catalog` — List or validate question catalogs
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from session logic.
//! - Handlers write to a caller-supplied `Write` so they can be tested
//!   without a terminal.
//! - Logs go to stderr; stdout carries only rendered views and JSON.

use std::path::Path;

use anyhow::{Context, Result};

use ria_core::QuestionCatalog;

pub mod catalog;
pub mod render;
pub mod run;
pub mod score;

/// Options shared by every subcommand.
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    /// The catalog selected by `--catalog`, or the built-in one.
    pub catalog: QuestionCatalog,
    /// Emit JSON where the subcommand supports it.
    pub json: bool,
}

/// Resolve the active catalog: a YAML file if given, the built-in otherwise.
pub fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog> {
    match path {
        Some(path) => QuestionCatalog::load(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Ok(QuestionCatalog::builtin()),
    }
}
