//! Application layer for koagen.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (`ScaffoldService`)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer drives the domain layer but holds no generation
//! rules itself. Which files exist and what goes into `package.json` is
//! decided in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ScaffoldReport, ScaffoldService};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProgressSink, TemplateRenderer};

pub use error::ApplicationError;
