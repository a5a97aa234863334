// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Invalid application name derived from '{destination}': {reason}")]
    InvalidAppName { destination: String, reason: String },

    #[error("Invalid manifest path '{path}': {reason}")]
    InvalidPath { path: String, reason: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("Duplicate path in manifest: {path}")]
    DuplicatePath { path: String },

    #[error("Duplicate package in {section}: {name}")]
    DuplicatePackage { name: String, section: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidOption(msg) => vec![
                "Check the options passed on the command line or in the config file".into(),
                format!("Details: {msg}"),
            ],
            Self::InvalidAppName { destination, .. } => vec![
                format!("The application name is taken from the last segment of '{destination}'"),
                "Use a directory name with letters, digits, '.', '-' or '~'".into(),
                "Example: koa my-app".into(),
            ],
            _ => vec!["This is likely a bug in koagen, please report it".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidOption(_) | Self::InvalidAppName { .. } => ErrorCategory::Validation,
            Self::InvalidPath { .. } | Self::DuplicatePath { .. } | Self::DuplicatePackage { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
