//! # ria CLI entry point
//!
//! Parses command-line arguments, sets up tracing, resolves the active
//! question catalog, and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ria_cli::catalog::{run_catalog, CatalogArgs};
use ria_cli::run::{run_interactive, RunArgs};
use ria_cli::score::{run_score, ScoreArgs};
use ria_cli::{load_catalog, GlobalOpts};

/// RIA Compliance Test.
///
/// Answers a fixed list of yes/no compliance questions and computes the
/// percentage of items the firm meets.
#[derive(Parser, Debug)]
#[command(name = "ria", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Question catalog YAML file (defaults to the built-in RIA questions).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output machine-readable JSON where supported.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Take the questionnaire interactively.
    Run(RunArgs),

    /// Score a prepared answer sheet.
    Score(ScoreArgs),

    /// List or validate question catalogs.
    Catalog(CatalogArgs),
}

/// Tracing level selected by the `-v` count.
fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directive for the subscriber. A non-blank `RUST_LOG` wins over `-v`.
fn filter_directive(verbose: u8, rust_log: Option<&str>) -> String {
    match rust_log.map(str::trim) {
        Some(directive) if !directive.is_empty() => directive.to_string(),
        _ => verbosity_level(verbose).to_string(),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let directive = filter_directive(cli.verbose, std::env::var("RUST_LOG").ok().as_deref());
    let filter = EnvFilter::try_new(&directive)
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("ria CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = load_catalog(cli.catalog.as_deref()).and_then(|catalog| {
        let opts = GlobalOpts {
            catalog,
            json: cli.json,
        };
        match &cli.command {
            Commands::Run(args) => run_interactive(args, &opts),
            Commands::Score(args) => run_score(args, &opts, &mut std::io::stdout().lock()),
            Commands::Catalog(args) => run_catalog(args, &opts, &mut std::io::stdout().lock()),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}
