//! # koa
//!
//! Koa application generator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (help / version / usage errors exit here).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Generate.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                   |
//! |------|-------------------------------------------|
//! |  0   | Success, help or version                  |
//! |  1   | Filesystem / internal error               |
//! |  2   | Usage error or destination not empty      |
//! |  4   | Configuration error                       |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, error::ErrorKind};
use tracing::{debug, info};

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let no_color = cli.global.no_color;

    match run(cli) {
        Ok(()) => {
            info!("koa completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, no_color),
    }
}

fn run(cli: Cli) -> CliResult<()> {
    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = AppConfig::load(cli.global.config.as_deref())?;

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Generate ───────────────────────────────────────────────────────
    commands::generate::execute(cli.generate, config, output)
}

/// Help and version go to stdout with exit 0. Anything else is a usage
/// error: clap's diagnostic on stderr, the usage line on stdout, exit 2.
fn handle_parse_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = e.print();
            println!("{}", Cli::command().render_usage());
            ExitCode::from(2)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool, no_color: bool) -> ExitCode {
    err.log();

    let color = !no_color && std::io::stderr().is_terminal();
    eprint!("{}", err.report(verbose, color));

    ExitCode::from(err.exit_code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_has_author() {
        assert!(Cli::command().get_author().is_some());
    }

    #[test]
    fn usage_line_names_the_binary() {
        let usage = Cli::command().render_usage().to_string();
        assert!(usage.starts_with("Usage: koa"));
    }
}
