//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::domain::ports::file_system::{FileSystem, FsError, FsResult};
use crate::domain::value_objects::FileMode;

/// Local file system implementation
///
/// Writes go through a temporary file in the destination directory and are
/// renamed into place, so a reader never sees a half-written file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        fs::read(path).map_err(|e| FsError::from_io(path, e))
    }

    fn write(&self, path: &Path, content: &[u8], mode: FileMode) -> FsResult<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        self.create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| FsError::from_io(parent, e))?;
        tmp.write_all(content)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| FsError::from_io(tmp.path(), e))?;
        set_mode(tmp.path(), mode)?;
        tmp.persist(path)
            .map_err(|e| FsError::from_io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> FsResult<bool> {
        match fs::symlink_metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }

    fn remove(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_dir(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir(path).map_err(|e| FsError::from_io(path, e))
    }

    fn is_empty_dir(&self, path: &Path) -> FsResult<bool> {
        let mut entries = fs::read_dir(path).map_err(|e| FsError::from_io(path, e))?;
        Ok(entries.next().is_none())
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: FileMode) -> FsResult<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode.bits()))
        .map_err(|e| FsError::from_io(path, e))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: FileMode) -> FsResult<()> {
    Ok(())
}
