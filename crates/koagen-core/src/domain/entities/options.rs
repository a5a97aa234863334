//! The `ProjectOptions` aggregate root and its builder.
//!
//! `ProjectOptions` is the fully-resolved, validated description of the
//! project the user wants to generate. The application name is derived at
//! build time; once a `ProjectOptions` exists it is immutable.
//!
//! # Domain purity
//!
//! This module must not import `tracing` and never touches the filesystem.
//! The caller resolves the destination against the working directory before
//! handing it over.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{FrameworkVersion, ViewEngine},
};

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A validated generator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOptions {
    destination: PathBuf,
    app_name: String,
    view_engine: ViewEngine,
    include_git: bool,
    force: bool,
    framework: FrameworkVersion,
}

impl ProjectOptions {
    /// Start building options for `destination`.
    ///
    /// The destination should be absolute so the application name can be
    /// derived from `.` or `..` style inputs.
    pub fn builder(destination: impl Into<PathBuf>) -> ProjectOptionsBuilder {
        ProjectOptionsBuilder::new(destination.into())
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
    pub fn app_name(&self) -> &str {
        &self.app_name
    }
    pub const fn view_engine(&self) -> ViewEngine {
        self.view_engine
    }
    pub const fn include_git(&self) -> bool {
        self.include_git
    }
    pub const fn force(&self) -> bool {
        self.force
    }
    pub const fn framework(&self) -> FrameworkVersion {
        self.framework
    }
}

impl fmt::Display for ProjectOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, views: {})",
            self.app_name, self.framework, self.view_engine
        )?;
        if self.include_git {
            f.write_str(" + git")?;
        }
        Ok(())
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectOptions`]. Unset fields take the generator defaults.
#[derive(Debug, Clone)]
pub struct ProjectOptionsBuilder {
    destination: PathBuf,
    view_engine: ViewEngine,
    include_git: bool,
    force: bool,
    framework: FrameworkVersion,
}

impl ProjectOptionsBuilder {
    fn new(destination: PathBuf) -> Self {
        Self {
            destination,
            view_engine: ViewEngine::default(),
            include_git: false,
            force: false,
            framework: FrameworkVersion::default(),
        }
    }

    pub fn view_engine(mut self, engine: ViewEngine) -> Self {
        self.view_engine = engine;
        self
    }

    pub fn include_git(mut self, include: bool) -> Self {
        self.include_git = include;
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn framework(mut self, framework: FrameworkVersion) -> Self {
        self.framework = framework;
        self
    }

    pub fn build(self) -> Result<ProjectOptions, DomainError> {
        let app_name = derive_app_name(&self.destination)?;
        Ok(ProjectOptions {
            destination: self.destination,
            app_name,
            view_engine: self.view_engine,
            include_git: self.include_git,
            force: self.force,
            framework: self.framework,
        })
    }
}

// ── App name derivation ───────────────────────────────────────────────────────

/// Derive the npm package name from the destination's final segment.
///
/// The name is the segment cleaned into a valid npm name, so it can differ
/// from the directory name (`MyApp` becomes `myapp`). A segment with nothing
/// usable left is rejected rather than written into `package.json`.
pub fn derive_app_name(destination: &Path) -> Result<String, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidAppName {
        destination: destination.display().to_string(),
        reason: reason.into(),
    };

    let mut segments: Vec<&std::ffi::OsStr> = Vec::new();
    for component in destination.components() {
        match component {
            Component::Normal(s) => segments.push(s),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir => {}
            Component::RootDir | Component::Prefix(_) => segments.clear(),
        }
    }

    let last = segments
        .last()
        .ok_or_else(|| invalid("destination has no final path segment"))?;
    let raw = last
        .to_str()
        .ok_or_else(|| invalid("final path segment is not valid UTF-8"))?;

    let name = sanitize_app_name(raw);
    if name.is_empty() {
        return Err(invalid("no usable characters remain"));
    }
    Ok(name)
}

/// Runs of characters outside `[A-Za-z0-9.~-]` become a single `-`,
/// leading `-_.` and trailing `-` are stripped, the result is lowercased.
fn sanitize_app_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '~') {
            out.push(c.to_ascii_lowercase());
            in_run = false;
        } else if !in_run {
            out.push('-');
            in_run = true;
        }
    }
    out.trim_start_matches(['-', '_', '.'])
        .trim_end_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let opts = ProjectOptions::builder("/tmp/my-app").build().unwrap();
        assert_eq!(opts.app_name(), "my-app");
        assert_eq!(opts.view_engine(), ViewEngine::Jade);
        assert_eq!(opts.framework(), FrameworkVersion::Current);
        assert!(!opts.include_git());
        assert!(!opts.force());
    }

    #[test]
    fn builder_full() {
        let opts = ProjectOptions::builder("/srv/api")
            .view_engine(ViewEngine::Ejs)
            .include_git(true)
            .force(true)
            .framework(FrameworkVersion::Legacy)
            .build()
            .unwrap();
        assert_eq!(opts.view_engine(), ViewEngine::Ejs);
        assert!(opts.include_git());
        assert!(opts.force());
        assert_eq!(opts.framework(), FrameworkVersion::Legacy);
        assert_eq!(opts.to_string(), "api (koa1, views: ejs) + git");
    }

    #[test]
    fn app_name_ignores_dot_segments() {
        assert_eq!(derive_app_name(Path::new("/work/app/.")).unwrap(), "app");
        assert_eq!(derive_app_name(Path::new("/work/app/sub/..")).unwrap(), "app");
        assert_eq!(derive_app_name(Path::new("/work/app/")).unwrap(), "app");
    }

    #[test]
    fn app_name_keeps_dots_and_digits() {
        assert_eq!(
            derive_app_name(Path::new("/tmp/app-1234.5678")).unwrap(),
            "app-1234.5678"
        );
    }

    #[test]
    fn app_name_is_sanitized() {
        assert_eq!(sanitize_app_name("My Cool App"), "my-cool-app");
        assert_eq!(sanitize_app_name("__hidden_app__"), "hidden-app");
        assert_eq!(sanitize_app_name(".dotted"), "dotted");
        assert_eq!(sanitize_app_name("a  &&  b"), "a-b");
    }

    #[test]
    fn app_name_may_differ_from_the_directory_name() {
        let opts = ProjectOptions::builder("/work/MyApp").build().unwrap();
        assert_eq!(opts.destination(), Path::new("/work/MyApp"));
        assert_eq!(opts.app_name(), "myapp");
    }

    #[test]
    fn root_destination_has_no_name() {
        assert!(matches!(
            derive_app_name(Path::new("/")),
            Err(DomainError::InvalidAppName { .. })
        ));
        assert!(matches!(
            ProjectOptions::builder("/tmp/___").build(),
            Err(DomainError::InvalidAppName { .. })
        ));
    }
}
