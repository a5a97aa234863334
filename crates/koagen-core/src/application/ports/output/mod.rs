//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `koagen-adapters` crate provides the filesystem and renderer
//! implementations; the CLI provides the progress sink.

use crate::domain::{ManifestEntry, ProjectOptions, ResolvedDependencies};
use crate::error::KoagenResult;
use std::io;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `koagen_adapters::filesystem::LocalFilesystem` (production)
/// - `koagen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// No method retries; a failure is surfaced as-is.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> KoagenResult<()>;

    /// Write content to a file.
    ///
    /// With `overwrite == false` an existing file is an error.
    fn write_file(&self, path: &Path, content: &[u8], overwrite: bool) -> KoagenResult<()>;

    /// Set file permissions.
    fn set_permissions(&self, path: &Path, executable: bool) -> KoagenResult<()>;

    /// Whether `path` is a directory holding at least one entry.
    ///
    /// A missing path or a non-directory yields `Ok(false)`.
    fn has_entries(&self, path: &Path) -> KoagenResult<bool>;
}

/// Port for turning a manifest entry into bytes.
///
/// Implemented by:
/// - `koagen_adapters::renderer::EmbeddedRenderer` (template bodies compiled in)
pub trait TemplateRenderer: Send + Sync {
    /// Render one entry.
    ///
    /// Returns `Ok(None)` for directories. An entry whose content key has no
    /// body of the requested kind is a `RenderingFailed` error.
    fn render(
        &self,
        entry: &ManifestEntry,
        options: &ProjectOptions,
        dependencies: &ResolvedDependencies,
    ) -> KoagenResult<Option<Vec<u8>>>;
}

/// Port receiving one record per artifact, in manifest order, after the
/// artifact has been written.
///
/// A failed record stops the run the same way a failed write does.
pub trait ProgressSink {
    fn created(&self, entry: &ManifestEntry) -> io::Result<()>;
}
