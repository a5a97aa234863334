//! Unified error handling for koagen core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for koagen core operations.
#[derive(Debug, Error, Clone)]
pub enum KoagenError {
    /// Errors from the domain layer (invalid options, broken invariants).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (destination checks, I/O, rendering).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl KoagenError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Filesystem,
    Internal,
}

/// Convenient result type alias.
pub type KoagenResult<T> = Result<T, KoagenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn destination_not_empty_is_validation_and_mentions_force() {
        let err: KoagenError = ApplicationError::DestinationNotEmpty {
            path: PathBuf::from("/tmp/app"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
    }

    #[test]
    fn filesystem_errors_keep_their_category() {
        let err: KoagenError = ApplicationError::FilesystemError {
            path: PathBuf::from("/tmp/app/bin"),
            reason: "permission denied".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Filesystem);
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn duplicate_path_is_internal() {
        let err: KoagenError = DomainError::DuplicatePath {
            path: "views".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
