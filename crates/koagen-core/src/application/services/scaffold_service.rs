//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Build and validate the manifest
//! 2. Resolve dependencies
//! 3. Check the destination
//! 4. Render and write every entry, reporting each one
//!
//! Writes are not staged. A failure part-way leaves the artifacts written so
//! far on disk; the caller is told which ones through the progress sink.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProgressSink, TemplateRenderer},
    },
    domain::{
        ArtifactKind, DomainValidator as validator, Manifest, ManifestEntry, ProjectOptions,
        ResolvedDependencies, build_manifest, resolve_dependencies,
    },
    error::{KoagenError, KoagenResult},
};

/// Outcome of a successful run, used for the final summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub app_name: String,
    /// Progress-log paths in the order they were created.
    pub created: Vec<String>,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    pub fn new(renderer: Box<dyn TemplateRenderer>, filesystem: Box<dyn Filesystem>) -> Self {
        Self {
            renderer,
            filesystem,
        }
    }

    /// Build the validated manifest and dependency lists for `options`
    /// without touching the filesystem.
    pub fn plan(&self, options: &ProjectOptions) -> KoagenResult<(Manifest, ResolvedDependencies)> {
        let manifest = build_manifest(options);
        validator::validate_manifest(&manifest).map_err(KoagenError::Domain)?;

        let dependencies = resolve_dependencies(options);
        validator::validate_dependencies(&dependencies).map_err(KoagenError::Domain)?;

        Ok((manifest, dependencies))
    }

    /// Generate the project described by `options`.
    #[instrument(
        skip_all,
        fields(
            app = %options.app_name(),
            destination = %options.destination().display()
        )
    )]
    pub fn scaffold(
        &self,
        options: &ProjectOptions,
        progress: &dyn ProgressSink,
    ) -> KoagenResult<ScaffoldReport> {
        info!(%options, "Scaffolding project");

        let (manifest, dependencies) = self.plan(options)?;
        debug!(entries = manifest.len(), "Manifest built");

        self.check_destination(options)?;

        let mut created = Vec::with_capacity(manifest.len());
        for entry in &manifest {
            let step = self
                .write_entry(entry, options, &dependencies)
                .and_then(|()| report(progress, entry));
            if let Err(e) = step {
                warn!(
                    error = %e,
                    path = %entry.path,
                    written = created.len(),
                    "Write failed, earlier artifacts are left in place"
                );
                return Err(e);
            }
            created.push(entry.display_path());
        }

        info!(artifacts = created.len(), "Scaffold completed successfully");
        Ok(ScaffoldReport {
            app_name: options.app_name().to_string(),
            created,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn check_destination(&self, options: &ProjectOptions) -> KoagenResult<()> {
        if options.force() {
            return Ok(());
        }
        let destination = options.destination();
        if self.filesystem.has_entries(destination)? {
            return Err(ApplicationError::DestinationNotEmpty {
                path: destination.to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    fn write_entry(
        &self,
        entry: &ManifestEntry,
        options: &ProjectOptions,
        dependencies: &ResolvedDependencies,
    ) -> KoagenResult<()> {
        let target = resolve_target(options.destination(), entry);

        match entry.kind {
            ArtifactKind::Directory => self.filesystem.create_dir_all(&target)?,
            ArtifactKind::StaticFile(_) | ArtifactKind::RenderedFile(_) => {
                let content = self
                    .renderer
                    .render(entry, options, dependencies)?
                    .ok_or_else(|| ApplicationError::RenderingFailed {
                        reason: format!("no content produced for file '{}'", entry.path),
                    })?;

                if let Some(parent) = target.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }
                self.filesystem
                    .write_file(&target, &content, options.force())?;

                if entry.permissions.executable_flag() {
                    self.filesystem.set_permissions(&target, true)?;
                }
            }
        }

        debug!(path = %entry.path, "Artifact written");
        Ok(())
    }
}

fn report(progress: &dyn ProgressSink, entry: &ManifestEntry) -> KoagenResult<()> {
    progress.created(entry).map_err(|e| {
        ApplicationError::ProgressFailed {
            path: entry.display_path(),
            reason: e.to_string(),
        }
        .into()
    })
}

fn resolve_target(destination: &Path, entry: &ManifestEntry) -> PathBuf {
    if entry.path.is_root() {
        destination.to_path_buf()
    } else {
        destination.join(entry.path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FrameworkVersion, ViewEngine};
    use mockall::mock;
    use std::cell::RefCell;
    use std::io;

    mock! {
        pub Fs {}
        impl Filesystem for Fs {
            fn create_dir_all(&self, path: &Path) -> KoagenResult<()>;
            fn write_file(&self, path: &Path, content: &[u8], overwrite: bool) -> KoagenResult<()>;
            fn set_permissions(&self, path: &Path, executable: bool) -> KoagenResult<()>;
            fn has_entries(&self, path: &Path) -> KoagenResult<bool>;
        }
    }

    /// Renders every file as its own path.
    struct EchoRenderer;

    impl TemplateRenderer for EchoRenderer {
        fn render(
            &self,
            entry: &ManifestEntry,
            _options: &ProjectOptions,
            _dependencies: &ResolvedDependencies,
        ) -> KoagenResult<Option<Vec<u8>>> {
            Ok((!entry.is_directory()).then(|| entry.path.as_str().as_bytes().to_vec()))
        }
    }

    /// Produces nothing, even for files.
    struct SilentRenderer;

    impl TemplateRenderer for SilentRenderer {
        fn render(
            &self,
            _entry: &ManifestEntry,
            _options: &ProjectOptions,
            _dependencies: &ResolvedDependencies,
        ) -> KoagenResult<Option<Vec<u8>>> {
            Ok(None)
        }
    }

    #[derive(Default)]
    struct RecordingSink(RefCell<Vec<String>>);

    impl ProgressSink for RecordingSink {
        fn created(&self, entry: &ManifestEntry) -> io::Result<()> {
            self.0.borrow_mut().push(entry.display_path());
            Ok(())
        }
    }

    /// Accepts `limit` records, then behaves like a closed pipe.
    struct ClosedAfter {
        limit: usize,
        seen: RefCell<usize>,
    }

    impl ProgressSink for ClosedAfter {
        fn created(&self, _entry: &ManifestEntry) -> io::Result<()> {
            let mut seen = self.seen.borrow_mut();
            if *seen == self.limit {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
            }
            *seen += 1;
            Ok(())
        }
    }

    fn options(force: bool) -> ProjectOptions {
        ProjectOptions::builder("/work/demo")
            .framework(FrameworkVersion::Legacy)
            .force(force)
            .build()
            .unwrap()
    }

    fn permissive_fs() -> MockFs {
        let mut fs = MockFs::new();
        fs.expect_has_entries().returning(|_| Ok(false));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs
    }

    #[test]
    fn writes_every_entry_in_manifest_order() {
        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(permissive_fs()));
        let sink = RecordingSink::default();

        let report = service.scaffold(&options(false), &sink).unwrap();

        let logged = sink.0.into_inner();
        assert_eq!(logged.len(), 19);
        assert_eq!(logged[..4], ["./", "bin/", "bin/www", "app.js"]);
        assert_eq!(report.created, logged);
        assert_eq!(report.app_name, "demo");
    }

    #[test]
    fn launcher_is_made_executable() {
        let mut fs = MockFs::new();
        fs.expect_has_entries().returning(|_| Ok(false));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|_, _, _| Ok(()));
        fs.expect_set_permissions()
            .withf(|path, executable| path == Path::new("/work/demo/bin/www") && *executable)
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));
        service
            .scaffold(&options(false), &RecordingSink::default())
            .unwrap();
    }

    #[test]
    fn non_empty_destination_is_refused_before_any_write() {
        let mut fs = MockFs::new();
        fs.expect_has_entries()
            .withf(|path| path == Path::new("/work/demo"))
            .returning(|_| Ok(true));
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));
        let sink = RecordingSink::default();
        let err = service.scaffold(&options(false), &sink).unwrap_err();

        assert!(matches!(
            err,
            KoagenError::Application(ApplicationError::DestinationNotEmpty { .. })
        ));
        assert!(sink.0.borrow().is_empty());
    }

    #[test]
    fn force_skips_the_check_and_overwrites() {
        let mut fs = MockFs::new();
        fs.expect_has_entries().never();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|_, _, overwrite| *overwrite)
            .returning(|_, _, _| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));

        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));
        let report = service
            .scaffold(&options(true), &RecordingSink::default())
            .unwrap();
        assert_eq!(report.created.len(), 19);
    }

    #[test]
    fn io_failure_aborts_without_rollback() {
        let mut fs = MockFs::new();
        fs.expect_has_entries().returning(|_| Ok(false));
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_set_permissions().returning(|_, _| Ok(()));
        fs.expect_write_file().returning(|path, _, _| {
            if path.ends_with("app.js") {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "disk full".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });

        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));
        let sink = RecordingSink::default();
        let err = service.scaffold(&options(false), &sink).unwrap_err();

        assert!(matches!(
            err,
            KoagenError::Application(ApplicationError::FilesystemError { .. })
        ));
        assert_eq!(sink.0.into_inner(), ["./", "bin/", "bin/www"]);
    }

    #[test]
    fn lost_progress_line_stops_the_run() {
        let mut fs = MockFs::new();
        fs.expect_has_entries().returning(|_| Ok(false));
        fs.expect_create_dir_all().times(2).returning(|_| Ok(()));
        fs.expect_write_file().never();

        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));
        let sink = ClosedAfter {
            limit: 1,
            seen: RefCell::new(0),
        };
        let err = service.scaffold(&options(false), &sink).unwrap_err();

        match err {
            KoagenError::Application(ApplicationError::ProgressFailed { path, reason }) => {
                assert_eq!(path, "bin/");
                assert!(reason.contains("stdout closed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_content_is_a_render_error() {
        let service = ScaffoldService::new(Box::new(SilentRenderer), Box::new(permissive_fs()));
        let sink = RecordingSink::default();
        let err = service.scaffold(&options(false), &sink).unwrap_err();

        assert!(matches!(
            err,
            KoagenError::Application(ApplicationError::RenderingFailed { .. })
        ));
        assert_eq!(sink.0.into_inner(), ["./", "bin/"]);
    }

    #[test]
    fn plan_is_pure_and_deterministic() {
        let mut fs = MockFs::new();
        fs.expect_has_entries().never();
        let service = ScaffoldService::new(Box::new(EchoRenderer), Box::new(fs));

        let opts = ProjectOptions::builder("/work/demo")
            .view_engine(ViewEngine::Ejs)
            .include_git(true)
            .build()
            .unwrap();
        let first = service.plan(&opts).unwrap();
        let second = service.plan(&opts).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.0.len(), 19);
    }
}
