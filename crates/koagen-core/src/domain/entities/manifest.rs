//! The generation manifest: which artifacts exist and where their content
//! comes from.
//!
//! A [`Manifest`] is a pure function of [`ProjectOptions`]. Its order is part
//! of the observable contract (the progress log replays it line by line), so
//! entries are appended in one fixed sequence and never sorted.

use std::collections::HashSet;

use crate::domain::{
    entities::{
        common::{Permissions, RelativePath},
        options::ProjectOptions,
    },
    error::DomainError,
    value_objects::{FrameworkVersion, ViewEngine},
};

// ── Content keys ──────────────────────────────────────────────────────────────

/// Which page of the view set a view file holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewPage {
    Index,
    Error,
    Layout,
}

impl ViewPage {
    pub const fn file_stem(&self) -> &'static str {
        match self {
            Self::Index => "index",
            Self::Error => "error",
            Self::Layout => "layout",
        }
    }
}

/// Identifies the template body or payload that fills a file entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    /// `bin/www`
    Launcher,
    /// `app.js`
    AppEntry(FrameworkVersion),
    /// `gulpfile.js`
    BuildFile,
    /// `log4js.json`
    LoggingConfig,
    /// `package.json`
    PackageManifest,
    /// `public/stylesheets/style.css`
    Stylesheet,
    /// `routes/index.js`; without a view engine the route writes its own page.
    IndexRoute(FrameworkVersion, ViewEngine),
    /// `routes/users.js`
    UsersRoute(FrameworkVersion),
    View(ViewEngine, ViewPage),
    /// `.gitignore`
    GitIgnore,
}

// ── Entries ───────────────────────────────────────────────────────────────────

/// How an artifact is materialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Directory,
    /// Bytes copied verbatim.
    StaticFile(ContentKey),
    /// Body with tokens substituted at render time.
    RenderedFile(ContentKey),
}

/// One artifact to materialize under the destination root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub path: RelativePath,
    pub kind: ArtifactKind,
    pub permissions: Permissions,
}

impl ManifestEntry {
    pub fn directory(path: impl Into<String>) -> Self {
        Self {
            path: RelativePath::new(path),
            kind: ArtifactKind::Directory,
            permissions: Permissions::default(),
        }
    }

    pub fn static_file(path: impl Into<String>, key: ContentKey) -> Self {
        Self {
            path: RelativePath::new(path),
            kind: ArtifactKind::StaticFile(key),
            permissions: Permissions::default(),
        }
    }

    pub fn rendered_file(path: impl Into<String>, key: ContentKey) -> Self {
        Self {
            path: RelativePath::new(path),
            kind: ArtifactKind::RenderedFile(key),
            permissions: Permissions::default(),
        }
    }

    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.kind, ArtifactKind::Directory)
    }

    /// The path as it appears in the progress log.
    pub fn display_path(&self) -> String {
        if self.is_directory() {
            self.path.display_as_dir()
        } else {
            self.path.to_string()
        }
    }
}

// ── Manifest ──────────────────────────────────────────────────────────────────

/// Ordered, immutable list of artifacts for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(entries: Vec<ManifestEntry>) -> Self {
        Self { entries }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(&entry.path) {
                return Err(DomainError::DuplicatePath {
                    path: entry.path.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.iter().any(|e| e.path.as_str() == path)
    }

}

impl<'a> IntoIterator for &'a Manifest {
    type Item = &'a ManifestEntry;
    type IntoIter = std::slice::Iter<'a, ManifestEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Build the manifest for `options`.
///
/// Shape depends only on `(view_engine, include_git)`; the framework version
/// only changes the content keys of `app.js` and the route files.
pub fn build_manifest(options: &ProjectOptions) -> Manifest {
    let framework = options.framework();
    let engine = options.view_engine();

    let mut entries = vec![
        ManifestEntry {
            path: RelativePath::root(),
            kind: ArtifactKind::Directory,
            permissions: Permissions::default(),
        },
        ManifestEntry::directory("bin"),
        ManifestEntry::rendered_file("bin/www", ContentKey::Launcher)
            .with_permissions(Permissions::executable()),
        ManifestEntry::rendered_file("app.js", ContentKey::AppEntry(framework)),
        ManifestEntry::static_file("gulpfile.js", ContentKey::BuildFile),
        ManifestEntry::static_file("log4js.json", ContentKey::LoggingConfig),
        ManifestEntry::rendered_file("package.json", ContentKey::PackageManifest),
        ManifestEntry::directory("public"),
        ManifestEntry::directory("public/javascripts"),
        ManifestEntry::directory("public/images"),
        ManifestEntry::directory("public/stylesheets"),
        ManifestEntry::static_file("public/stylesheets/style.css", ContentKey::Stylesheet),
        ManifestEntry::directory("routes"),
        ManifestEntry::static_file(
            "routes/index.js",
            ContentKey::IndexRoute(framework, engine),
        ),
        ManifestEntry::static_file("routes/users.js", ContentKey::UsersRoute(framework)),
        ManifestEntry::directory("views"),
    ];

    if !engine.is_none() {
        let mut pages = vec![ViewPage::Index, ViewPage::Error];
        if engine.uses_layout() {
            pages.push(ViewPage::Layout);
        }
        entries.extend(pages.into_iter().map(|page| {
            ManifestEntry::static_file(
                format!("views/{}.{}", page.file_stem(), engine.extension()),
                ContentKey::View(engine, page),
            )
        }));
    }

    if options.include_git() {
        entries.push(ManifestEntry::static_file(".gitignore", ContentKey::GitIgnore));
    }

    Manifest::new(entries)
}
