//! textfixture: check, format and inspect fixture files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use regex::Regex;
use std::io::{Write, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod targets;

use commands::Outcome;

#[derive(Parser)]
#[command(name = "textfixture")]
#[command(about = "Check, format and inspect textfixture files", long_about = None)]
struct Args {
    /// Config file to use instead of ~/.config/textfixture/config.toml
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse fixtures and report any that are malformed
    Check {
        /// Fixture files or directories; defaults to the configured fixtures
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// Rewrite fixtures in canonical form
    Fmt {
        /// Only report fixtures that would change
        #[arg(long)]
        check: bool,

        /// Fixture files or directories; defaults to the configured fixtures
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
    /// List the sections of a fixture
    Sections {
        file: PathBuf,

        /// Only list sections whose title matches
        #[arg(long, value_name = "REGEX")]
        matching: Option<String>,
    },
    /// Print the body of a section verbatim
    Show { file: PathBuf, section: String },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(args) {
        Ok(Outcome::Clean) => ExitCode::SUCCESS,
        Ok(Outcome::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<Outcome> {
    let mut out = stdout().lock();
    let config = args.config.as_deref();

    let outcome = match args.command {
        Command::Check { paths } => {
            let files = targets::resolve(&paths, config)?;
            commands::check(&files, &mut out)?
        }
        Command::Fmt { check, paths } => {
            let files = targets::resolve(&paths, config)?;
            commands::fmt(&files, check, &mut out)?
        }
        Command::Sections { file, matching } => {
            let matching = matching
                .map(|pattern| {
                    Regex::new(&pattern).with_context(|| format!("invalid regex {pattern:?}"))
                })
                .transpose()?;
            commands::sections(&file, matching.as_ref(), &mut out)?
        }
        Command::Show { file, section } => commands::show(&file, &section, &mut out)?,
    };

    out.flush()?;
    Ok(outcome)
}
