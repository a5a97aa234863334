use super::DomainError;
use std::fmt;
use std::path::PathBuf;

/// A slash-separated path guaranteed to stay inside the destination root.
///
/// Invariant: never absolute, never contains `..` or empty segments.
/// The single segment `.` denotes the destination root itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelativePath(String);

impl RelativePath {
    const ROOT: &'static str = ".";

    /// The destination root.
    pub fn root() -> Self {
        Self(Self::ROOT.to_string())
    }

    /// Create a new relative path.
    ///
    /// # Panics
    /// Panics if the path is invalid (use `try_new` for fallible).
    pub fn new(path: impl Into<String>) -> Self {
        match Self::try_new(path) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Fallible constructor.
    pub fn try_new(path: impl Into<String>) -> Result<Self, DomainError> {
        let path = path.into();
        let invalid = |reason: &str| DomainError::InvalidPath {
            path: path.clone(),
            reason: reason.into(),
        };

        if path == Self::ROOT {
            return Ok(Self(path));
        }
        if path.is_empty() {
            return Err(invalid("path is empty"));
        }
        if path.starts_with('/') || path.contains('\\') || path.contains(':') {
            return Err(invalid("absolute or platform-specific paths are not allowed"));
        }
        for segment in path.split('/') {
            match segment {
                "" => return Err(invalid("empty path segment")),
                "." | ".." => return Err(invalid("relative segments are not allowed")),
                _ => {}
            }
        }
        Ok(Self(path))
    }

    pub fn is_root(&self) -> bool {
        self.0 == Self::ROOT
    }

    /// The enclosing directory, `None` for top-level entries and the root.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once('/')
            .map(|(parent, _)| Self(parent.to_string()))
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| *s != Self::ROOT)
    }

    /// Platform path relative to the destination root.
    pub fn to_path_buf(&self) -> PathBuf {
        self.segments().collect()
    }

    /// Progress-log form: directories carry a trailing `/`.
    pub fn display_as_dir(&self) -> String {
        format!("{}/", self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelativePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Capability-based permissions model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    executable: bool,
}

impl Permissions {
    pub const fn read_write() -> Self {
        Self { executable: false }
    }

    pub const fn executable() -> Self {
        Self { executable: true }
    }

    pub const fn executable_flag(&self) -> bool {
        self.executable
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::read_write()
    }
}
