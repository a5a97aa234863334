//! Output management and formatting.
//!
//! stdout carries exactly two things on success: one `create : <path>` line
//! per artifact and the next-steps block.

use std::io::{self, IsTerminal};

use console::Term;
use koagen_core::{application::ports::ProgressSink, domain::ManifestEntry};
use owo_colors::OwoColorize;

use crate::cli::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color || !io::stdout().is_terminal(),
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// One progress line for a created artifact.
    pub fn create_line(&self, path: &str) -> io::Result<()> {
        self.print(&self.format_create(path))
    }

    /// Post-generation instructions.
    pub fn next_steps(&self, destination: &str, app_name: &str) -> io::Result<()> {
        for line in next_steps_lines(destination, app_name, cfg!(windows)) {
            self.print(&line)?;
        }
        Ok(())
    }

    fn format_create(&self, path: &str) -> String {
        if self.no_color {
            format!("   create : {path}")
        } else {
            format!("   {} : {path}", "create".cyan())
        }
    }
}

impl ProgressSink for OutputManager {
    fn created(&self, entry: &ManifestEntry) -> io::Result<()> {
        self.create_line(&entry.display_path())
    }
}

fn next_steps_lines(destination: &str, app_name: &str, windows: bool) -> Vec<String> {
    let run = if windows {
        format!("     > SET DEBUG={app_name}:* & npm start")
    } else {
        format!("     $ DEBUG={app_name}:* npm start")
    };
    vec![
        String::new(),
        "   install dependencies:".into(),
        format!("     $ cd {destination} && npm install"),
        String::new(),
        "   run the app:".into(),
        run,
        String::new(),
    ]
}

// ── tests ─────────────────────────────────────────────────────────────────────
