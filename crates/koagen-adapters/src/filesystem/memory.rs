//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use koagen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::KoagenResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can hand one clone to the service and keep
/// another for assertions.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<Vec<u8>> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Read a file as UTF-8 text (testing helper).
    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read_file(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    /// Check if a file is marked executable.
    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }

    /// Whether `path` was created as a directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.directories.contains(path))
            .unwrap_or(false)
    }

    /// List all files in path order.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> KoagenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            if inner.files.contains_key(&current) {
                return Err(ApplicationError::FilesystemError {
                    path: current,
                    reason: "A file exists where a directory is required".into(),
                }
                .into());
            }
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &[u8], overwrite: bool) -> KoagenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        let orphaned = path
            .parent()
            .is_some_and(|p| !p.as_os_str().is_empty() && !inner.directories.contains(p));
        if orphaned {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Parent directory does not exist".into(),
            }
            .into());
        }

        if !overwrite && inner.files.contains_key(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "File already exists".into(),
            }
            .into());
        }

        inner.files.insert(path.to_path_buf(), content.to_vec());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> KoagenResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }

        Ok(())
    }

    fn has_entries(&self, path: &Path) -> KoagenResult<bool> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;

        if !inner.directories.contains(path) {
            return Ok(false);
        }
        let is_child = |p: &PathBuf| p.parent() == Some(path);
        Ok(inner.files.keys().any(is_child) || inner.directories.iter().any(is_child))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/a/b.txt"), b"x", false).is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/b.txt"), b"x", false).unwrap();
        assert_eq!(fs.read_to_string(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn overwrite_flag_is_respected() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/f"), b"1", false).unwrap();

        assert!(fs.write_file(Path::new("/a/f"), b"2", false).is_err());
        fs.write_file(Path::new("/a/f"), b"2", true).unwrap();
        assert_eq!(fs.read_file(Path::new("/a/f")), Some(b"2".to_vec()));
    }

    #[test]
    fn directory_over_file_is_rejected() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file(Path::new("/a/bin"), b"", false).unwrap();

        assert!(fs.create_dir_all(Path::new("/a/bin/www")).is_err());
    }

    #[test]
    fn has_entries_sees_direct_children_only() {
        let fs = MemoryFilesystem::new();
        assert!(!fs.has_entries(Path::new("/a")).unwrap());

        fs.create_dir_all(Path::new("/a")).unwrap();
        assert!(!fs.has_entries(Path::new("/a")).unwrap());

        fs.create_dir_all(Path::new("/a/b")).unwrap();
        assert!(fs.has_entries(Path::new("/a")).unwrap());
        assert!(!fs.has_entries(Path::new("/a/b")).unwrap());
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/x")).unwrap();
        fs.set_permissions(Path::new("/x"), true).unwrap();

        assert!(view.is_dir(Path::new("/x")));
        assert!(view.is_executable(Path::new("/x")));
    }
}
