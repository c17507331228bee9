//! # Text Rendering
//!
//! Pure `&Session -> String` renderers for the two views. The question view
//! shows each question as a card with its selected answer highlighted; the
//! results view shows the score summary.

use std::fmt;

use ria_core::{Question, Response};
use ria_state::{non_compliant_questions, Session, ViewState};

/// Page title shown above the question list.
pub const TITLE: &str = "RIA Compliance Test";

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  y | yes | n | no     answer the focused question
  <id> y|n             answer a question by id (e.g. `2 no`)
  next | j             focus the next question
  prev | k             focus the previous question
  submit | s           submit the test (all questions must be answered)
  review | r           return from results to the questions
  help | ?             show this help
  quit | q             end the session";

/// Render whichever view the session is in.
pub fn render(session: &Session) -> String {
    match session.view() {
        ViewState::Questionnaire => render_questionnaire(session),
        ViewState::Results => render_results(session),
    }
}

/// The question list, per-question selection, and the submit control.
pub fn render_questionnaire(session: &Session) -> String {
    QuestionnaireView(session).to_string()
}

/// The score summary and the review control.
pub fn render_results(session: &Session) -> String {
    ResultsView(session).to_string()
}

struct QuestionnaireView<'a>(&'a Session);

impl fmt::Display for QuestionnaireView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        write_heading(f, TITLE)?;

        let focused = session.focused_question().map(|q| q.id);
        for question in session.catalog() {
            let marker = if Some(question.id) == focused { '>' } else { ' ' };
            write_card(f, marker, question, session.answers().get(question.id))?;
        }

        let state = if session.can_submit() { "enabled" } else { "disabled" };
        writeln!(
            f,
            "[Submit Test] {state} ({}/{} answered)",
            session.answered_count(),
            session.catalog().len()
        )
    }
}

struct ResultsView<'a>(&'a Session);

impl fmt::Display for ResultsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let summary = session.results();
        write_heading(f, "Compliance Test Results")?;

        writeln!(f, "Overall Score: {}%", summary.score_display())?;
        writeln!(f)?;
        writeln!(f, "Compliant Items:     {}", summary.compliant_items)?;
        writeln!(f, "Non-Compliant Items: {}", summary.non_compliant_items)?;

        if !summary.by_importance.is_empty() {
            writeln!(f)?;
            writeln!(f, "By importance:")?;
            for tally in &summary.by_importance {
                writeln!(
                    f,
                    "  {:<9} {}/{} compliant",
                    tally.importance.as_str(),
                    tally.compliant,
                    tally.total
                )?;
            }
        }

        let failing = non_compliant_questions(session.answers(), session.catalog());
        if !failing.is_empty() {
            writeln!(f)?;
            writeln!(f, "Non-compliant:")?;
            for q in failing {
                writeln!(f, "  {} [{}] {}", q.id, q.importance, q.question)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "[Review Answers]")
    }
}

fn write_heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(title.len()))?;
    writeln!(f)
}

fn write_card(
    f: &mut fmt::Formatter<'_>,
    marker: char,
    question: &Question,
    selected: Option<Response>,
) -> fmt::Result {
    let tick = |r: Response| if selected == Some(r) { 'x' } else { ' ' };
    writeln!(f, "{marker} {} {}", question.id, question.question)?;
    writeln!(
        f,
        "     Category: {} | Importance: {}",
        question.category, question.importance
    )?;
    writeln!(f, "     [{}] Yes   [{}] No", tick(Response::Yes), tick(Response::No))?;
    writeln!(f)
}
