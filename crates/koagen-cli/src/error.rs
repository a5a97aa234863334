//! Failures of a `koa` run and how they reach the terminal.
//!
//! Every failure ends up as one [`CliError`]; its category picks the exit
//! code and [`CliError::report`] renders the stderr block.

use std::error::Error;

use owo_colors::{OwoColorize, Style};
use thiserror::Error;

use koagen_core::error::KoagenError;

pub use koagen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file or variable could not be read or understood.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `koagen-core`.
    #[error("Generation failed: {0}")]
    Core(#[from] KoagenError),

    /// An I/O operation outside the generator failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Valid views: jade, ejs, hbs, hogan, none; valid frameworks: koa1, koa2".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Filesystem | CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// The block written to stderr when a run fails.
    ///
    /// Starts with `koa: <error>`. With `verbose` the cause chain follows;
    /// every suggestion is printed as a `hint:` line.
    pub fn report(&self, verbose: bool, color: bool) -> String {
        let paint = |line: String, style: Style| {
            if color {
                line.style(style).to_string()
            } else {
                line
            }
        };

        let mut lines = vec![paint(format!("koa: {self}"), Style::new().red().bold())];

        if verbose {
            let mut cause = self.source();
            while let Some(err) = cause {
                lines.push(paint(format!("  caused by: {err}"), Style::new().dimmed()));
                cause = err.source();
            }
        } else if self.source().is_some() {
            lines.push(paint(
                "  (run again with -v to see what caused it)".into(),
                Style::new().dimmed(),
            ));
        }

        for hint in self.suggestions() {
            lines.push(paint(format!("  hint: {hint}"), Style::new().yellow()));
        }

        lines.push(String::new());
        lines.join("\n")
    }

    /// Record the failure in the log before it is reported.
    ///
    /// Refusals are warnings; anything that broke mid-run is an error.
    pub fn log(&self) {
        let category = self.category();
        if category == ErrorCategory::UserError {
            tracing::warn!(?category, error = %self, "generation refused");
        } else {
            tracing::error!(?category, error = %self, "generation failed");
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, unsafe destination).
    UserError,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

// ── Result extension ──────────────────────────────────────────────────────────

/// Attach the step that was running when a foreign error surfaced.
pub trait ResultExt<T> {
    fn during(self, step: &str) -> CliResult<T>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn during(self, step: &str) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: format!("failed while {step}"),
            source,
        })
    }
}

impl<T> ResultExt<T> for Result<T, config::ConfigError> {
    fn during(self, step: &str) -> CliResult<T> {
        self.map_err(|e| CliError::ConfigError {
            message: format!("failed while {step}: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use koagen_core::application::ApplicationError;
    use std::io;
    use std::path::PathBuf;

    fn not_empty() -> CliError {
        CliError::Core(
            ApplicationError::DestinationNotEmpty {
                path: PathBuf::from("/tmp/app"),
            }
            .into(),
        )
    }

    #[test]
    fn destination_not_empty_suggests_force_and_exits_2() {
        let err = not_empty();
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn filesystem_failure_exits_1() {
        let err = CliError::Core(
            ApplicationError::FilesystemError {
                path: PathBuf::from("/tmp/app/bin"),
                reason: "denied".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_io_is_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    #[test]
    fn refusal_report_leads_with_koa_and_hints_at_force() {
        let report = not_empty().report(false, false);
        let first = report.lines().next().unwrap();
        assert!(first.starts_with("koa: Generation failed"));
        assert!(first.contains("not empty"));
        assert!(report.contains("  hint: Rerun with --force"));
        assert!(report.contains("run again with -v"));
    }

    #[test]
    fn verbose_report_shows_causes_instead_of_the_prompt() {
        let report = not_empty().report(true, false);
        assert!(report.contains("  caused by: Application error"));
        assert!(!report.contains("run again with -v"));
    }

    #[test]
    fn plain_report_has_no_escape_codes() {
        assert!(!not_empty().report(true, false).contains('\u{1b}'));
    }

    #[test]
    fn lost_progress_line_exits_1() {
        let err = CliError::Core(
            ApplicationError::ProgressFailed {
                path: "bin/".into(),
                reason: "broken pipe".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 1);
        assert!(err.report(false, false).contains("bin/"));
    }

    #[test]
    fn io_errors_name_the_step() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match result.during("reading the working directory") {
            Err(CliError::IoError { message, .. }) => {
                assert_eq!(message, "failed while reading the working directory");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
