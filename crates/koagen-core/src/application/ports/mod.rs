//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `koagen-adapters` and
//! `koagen-cli` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRenderer`: Content for manifest entries
//!   - `ProgressSink`: One record per materialized artifact

pub mod output;

pub use output::{Filesystem, ProgressSink, TemplateRenderer};
