//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the domain layer to write, inspect and remove files
//! without depending on a concrete implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ContentHash, FileMode};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// File or directory not found
    #[error("not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// Directory still has entries
    #[error("directory not empty: {}", .0.display())]
    NotEmpty(PathBuf),
    /// Any other I/O error
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Classify an I/O error raised while operating on `path`
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            ErrorKind::DirectoryNotEmpty => FsError::NotEmpty(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FsError::NotFound(_))
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in the application tests
pub trait FileSystem: Send + Sync {
    /// Read file content as raw bytes
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Write content with the given permissions, creating parent directories
    fn write(&self, path: &Path, content: &[u8], mode: FileMode) -> FsResult<()>;

    /// Check if a path exists.
    ///
    /// Errors other than "not found" are returned, not folded into `false`.
    fn exists(&self, path: &Path) -> FsResult<bool>;

    /// Remove a file
    fn remove(&self, path: &Path) -> FsResult<()>;

    /// Remove an empty directory
    fn remove_dir(&self, path: &Path) -> FsResult<()>;

    /// Whether a directory has no entries
    fn is_empty_dir(&self, path: &Path) -> FsResult<bool>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Compute content hash (SHA-256)
    fn hash(&self, path: &Path) -> FsResult<ContentHash> {
        self.read(path).map(|bytes| ContentHash::from_bytes(&bytes))
    }
}
