//! # Run Subcommand
//!
//! Interactive questionnaire session. Reads one command per line, turns it
//! into a session action, dispatches it, and re-renders the view. Rejected
//! actions print a one-line `error:` message and the session continues.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use clap::Args;

use ria_core::{QuestionId, Response};
use ria_state::{Action, Session};

use crate::render;
use crate::GlobalOpts;

/// Arguments for the `ria run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Print the final result summary as JSON when the session ends.
    #[arg(long)]
    pub summary_json: bool,
}

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Answer the focused question.
    Answer(Response),
    /// Answer a question by id.
    AnswerId(QuestionId, Response),
    /// Focus the next question.
    Next,
    /// Focus the previous question.
    Previous,
    /// Submit the test.
    Submit,
    /// Return to the questions from the results view.
    Review,
    /// Print the command reference.
    Help,
    /// End the session.
    Quit,
}

/// Parse one line of input.
pub fn parse_command(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [word] => match word.to_ascii_lowercase().as_str() {
            "next" | "j" => Command::Next,
            "prev" | "k" => Command::Previous,
            "submit" | "s" => Command::Submit,
            "review" | "r" => Command::Review,
            "help" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            _ => match word.parse::<Response>() {
                Ok(response) => Command::Answer(response),
                Err(_) => bail!("unrecognized command {word:?}; type `help` for a list"),
            },
        },
        [id, response] => {
            let id = id
                .parse::<QuestionId>()
                .map_err(|_| anyhow::anyhow!("invalid question id {id:?}"))?;
            Command::AnswerId(id, response.parse::<Response>()?)
        }
        [] => bail!("empty command"),
        _ => bail!("too many words in {line:?}; type `help` for a list"),
    };
    Ok(command)
}

/// Drive `session` from `input`, writing views and errors to `out`.
///
/// Returns when the user quits or input ends.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> Result<()> {
    write!(out, "{}", render::render(session))?;
    writeln!(out, "Type `help` for commands.")?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buf) else {
            writeln!(out, "error: input line is not valid UTF-8")?;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue;
            }
        };

        let action = match command {
            Command::Quit => break,
            Command::Help => {
                writeln!(out, "{}", render::HELP)?;
                continue;
            }
            Command::Answer(response) => match session.focused_question() {
                Some(q) => Action::AnswerRecorded {
                    question_id: q.id,
                    response,
                },
                None => {
                    writeln!(out, "error: no question to answer")?;
                    continue;
                }
            },
            Command::AnswerId(question_id, response) => Action::AnswerRecorded {
                question_id,
                response,
            },
            Command::Next => Action::FocusNext,
            Command::Previous => Action::FocusPrevious,
            Command::Submit => Action::Submitted,
            Command::Review => Action::ReviewRequested,
        };

        match session.dispatch(action) {
            Ok(_) => write!(out, "{}", render::render(session))?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
    }
    Ok(())
}

/// Execute the run subcommand on stdin/stdout.
pub fn run_interactive(args: &RunArgs, opts: &GlobalOpts) -> Result<u8> {
    let mut session = Session::new(opts.catalog.clone());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    run_session(&mut session, stdin.lock(), &mut out)?;

    if args.summary_json || opts.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.results())?)?;
    }
    tracing::info!(
        session_id = %session.id(),
        view = %session.view(),
        answered = session.answered_count(),
        "questionnaire session ended"
    );
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ria_core::QuestionCatalog;
    use ria_state::ViewState;

    fn drive(script: &str) -> (Session, String) {
        let mut session = Session::new(QuestionCatalog::builtin());
        let mut out = Vec::new();
        run_session(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn parse_single_words() {
        assert_eq!(parse_command("next").unwrap(), Command::Next);
        assert_eq!(parse_command("K").unwrap(), Command::Previous);
        assert_eq!(parse_command("s").unwrap(), Command::Submit);
        assert_eq!(parse_command("review").unwrap(), Command::Review);
        assert_eq!(parse_command("?").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(parse_command("yes").unwrap(), Command::Answer(Response::Yes));
        assert_eq!(parse_command("N").unwrap(), Command::Answer(Response::No));
    }

    #[test]
    fn parse_answer_by_id() {
        assert_eq!(
            parse_command("2 no").unwrap(),
            Command::AnswerId(QuestionId(2), Response::No)
        );
        assert_eq!(
            parse_command("Q3 y").unwrap(),
            Command::AnswerId(QuestionId(3), Response::Yes)
        );
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_command("maybe").is_err());
        assert!(parse_command("x yes").is_err());
        assert!(parse_command("1 perhaps").is_err());
        assert!(parse_command("1 yes now").is_err());
    }

    #[test]
    fn answering_in_order_then_submitting() {
        let (session, out) = drive("y\ny\nn\nsubmit\n");
        assert_eq!(session.view(), ViewState::Results);
        assert!(out.contains("Overall Score: 66.7%"));
    }

    #[test]
    fn early_submit_prints_error_and_continues() {
        let (session, out) = drive("1 yes\nsubmit\n2 yes\n3 yes\nsubmit\n");
        assert!(out.contains("error: cannot submit: 1 of 3 questions answered"));
        assert_eq!(session.view(), ViewState::Results);
        assert!(out.contains("Overall Score: 100.0%"));
    }

    #[test]
    fn unknown_id_is_reported() {
        let (session, out) = drive("7 yes\n");
        assert!(out.contains("error: unknown question Q7"));
        assert!(session.answers().is_empty());
    }

    #[test]
    fn review_keeps_answers_visible() {
        let (session, out) = drive("n\nn\nn\ns\nr\n");
        assert_eq!(session.view(), ViewState::Questionnaire);
        assert_eq!(session.answers().len(), 3);
        let last_view = out.rsplit("RIA Compliance Test").next().unwrap();
        assert_eq!(last_view.matches("[ ] Yes   [x] No").count(), 3);
        assert!(last_view.contains("[Submit Test] enabled (3/3 answered)"));
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = drive("q\n1 yes\n");
        assert!(session.answers().is_empty());
    }

    #[test]
    fn help_lists_commands() {
        let (_, out) = drive("help\n");
        assert!(out.contains("answer the focused question"));
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let mut script = b"1 yes\n".to_vec();
        script.extend_from_slice(&[0xff, 0xfe, b'\n']);
        script.extend_from_slice(b"2 yes\n3 yes\nsubmit\n");

        let mut session = Session::new(QuestionCatalog::builtin());
        let mut out = Vec::new();
        run_session(&mut session, script.as_slice(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("error: input line is not valid UTF-8"));
        assert_eq!(session.answered_count(), 3);
        assert_eq!(session.view(), ViewState::Results);
    }

    #[test]
    fn final_line_without_newline_is_read() {
        let (session, _) = drive("1 yes");
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let (_, out) = drive("\n   \n");
        assert!(!out.contains("error:"));
    }
}
