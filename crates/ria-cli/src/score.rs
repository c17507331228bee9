//! # Score Subcommand
//!
//! Non-interactive scoring. Replays an answer sheet (`{id: yes|no}` in YAML
//! or JSON) through the same session reducer the interactive front end
//! uses, then submits and prints the results.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use ria_core::{AnswerMap, QuestionCatalog};
use ria_state::{Action, Session};

use crate::render;
use crate::GlobalOpts;

/// Arguments for the `ria score` subcommand.
#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// Path to the answer sheet (YAML or JSON map of question id to yes/no).
    #[arg(long)]
    pub answers: PathBuf,
}

/// Read an answer sheet from disk. Files ending in `.json` are parsed as
/// JSON, everything else as YAML.
pub fn read_answer_sheet(path: &Path) -> Result<AnswerMap> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read answer sheet {}", path.display()))?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let sheet = if is_json {
        serde_json::from_str(&text).map_err(anyhow::Error::from)
    } else {
        serde_yaml::from_str(&text).map_err(anyhow::Error::from)
    };
    sheet.with_context(|| format!("failed to parse answer sheet {}", path.display()))
}

/// Replay `sheet` into a fresh session and submit it.
///
/// Fails on the first unknown question id or if the sheet leaves a catalog
/// question unanswered.
pub fn replay(catalog: &QuestionCatalog, sheet: &AnswerMap) -> Result<Session> {
    let mut session = Session::new(catalog.clone());
    for (question_id, response) in sheet.iter() {
        session
            .dispatch(Action::AnswerRecorded {
                question_id,
                response,
            })
            .context("answer sheet rejected")?;
    }
    session
        .dispatch(Action::Submitted)
        .context("answer sheet is incomplete")?;
    Ok(session)
}

/// Execute the score subcommand.
pub fn run_score<W: Write>(args: &ScoreArgs, opts: &GlobalOpts, out: &mut W) -> Result<u8> {
    let sheet = read_answer_sheet(&args.answers)?;
    tracing::debug!(path = %args.answers.display(), entries = sheet.len(), "read answer sheet");

    let session = replay(&opts.catalog, &sheet)?;
    if opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.results())?)?;
    } else {
        write!(out, "{}", render::render_results(&session))?;
    }
    Ok(0)
}
