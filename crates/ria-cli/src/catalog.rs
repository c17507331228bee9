//! # Catalog Subcommand
//!
//! Inspect the active question catalog or validate a catalog file before
//! handing it to `--catalog`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use ria_core::QuestionCatalog;

use crate::GlobalOpts;

/// Arguments for the `ria catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

/// Catalog subcommands.
#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List the active catalog (built-in, or the one given by `--catalog`).
    List,

    /// Load a catalog YAML file and report whether it is valid.
    Validate {
        /// Path to the catalog YAML file.
        path: PathBuf,
    },
}

/// Execute the catalog subcommand.
pub fn run_catalog<W: Write>(args: &CatalogArgs, opts: &GlobalOpts, out: &mut W) -> Result<u8> {
    match &args.command {
        CatalogCommand::List => cmd_list(&opts.catalog, opts.json, out),
        CatalogCommand::Validate { path } => {
            let catalog = QuestionCatalog::load(path)
                .with_context(|| format!("invalid catalog {}", path.display()))?;
            writeln!(out, "OK: {} questions", catalog.len())?;
            Ok(0)
        }
    }
}

fn cmd_list<W: Write>(catalog: &QuestionCatalog, json: bool, out: &mut W) -> Result<u8> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog)?)?;
        return Ok(0);
    }
    for q in catalog {
        writeln!(
            out,
            "{:<5} {:<9} {:<20} {}",
            q.id.to_string(),
            q.importance.as_str(),
            q.category,
            q.question
        )?;
    }
    Ok(0)
}
