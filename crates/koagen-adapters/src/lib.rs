//! Infrastructure adapters for koagen.
//!
//! This crate implements the ports defined in `koagen_core::application::ports`.
//! It contains all I/O and the embedded template bodies.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::EmbeddedRenderer;
