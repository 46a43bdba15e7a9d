//! SourceResolver port - obtains the bytes behind a declared file

use std::path::PathBuf;

use crate::domain::entities::{ContentSource, DesiredFile};
use crate::domain::ports::file_system::FsError;

/// Result type for source resolution
pub type SourceResult<T> = Result<T, SourceError>;

/// Why the content of a declared file could not be obtained
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source file {} does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("bad response status {status} from {url}")]
    Http { url: String, status: u16 },
    #[error("fetching {url}: {message}")]
    Request { url: String, message: String },
    #[error("source {} is a directory and must be expanded first", .0.display())]
    IsDirectory(PathBuf),
    #[error("walking {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Resolves sources to bytes and expands directory sources
pub trait SourceResolver: Send + Sync {
    /// Obtain the raw bytes of a single-file source
    fn resolve(&self, source: &ContentSource) -> SourceResult<Vec<u8>>;

    /// Expand a declaration into concrete files.
    ///
    /// Directory sources become one file per regular file beneath them;
    /// anything else is returned unchanged.
    fn expand(&self, file: DesiredFile) -> SourceResult<Vec<DesiredFile>>;
}
