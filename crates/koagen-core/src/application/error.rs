//! Application layer errors.
//!
//! These errors represent failures while materializing a manifest, not
//! option-model violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Destination already holds entries and `force` was not given.
    #[error("Destination is not empty: {path}")]
    DestinationNotEmpty { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An artifact was written but its progress record could not be emitted.
    #[error("Could not report '{path}': {reason}")]
    ProgressFailed { path: String, reason: String },

    /// A content key could not be turned into bytes.
    #[error("Template rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Shared adapter state was poisoned by a panicking thread.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DestinationNotEmpty { path } => vec![
                format!("'{}' already contains files", path.display()),
                "Rerun with --force to generate into it anyway".into(),
                "Or choose an empty or new directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files created before the failure were left in place".into(),
            ],
            Self::ProgressFailed { path, .. } => vec![
                format!("'{path}' was written but its progress line was lost"),
                "Check that standard output is still open (for example a closed pipe)".into(),
            ],
            Self::RenderingFailed { .. } | Self::LockPoisoned => vec![
                "This appears to be a bug in koagen".into(),
                "Please report this issue with the command you ran".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DestinationNotEmpty { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::ProgressFailed { .. } => {
                ErrorCategory::Filesystem
            }
            Self::RenderingFailed { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
