//! Error types for Structuresmith
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ports::{FsError, ManifestError, SourceError};

/// Result type alias for Structuresmith operations
pub type StructuresmithResult<T> = Result<T, StructuresmithError>;

/// Main error type for a reconciliation run
///
/// Every variant that concerns a single file carries its destination so the
/// caller can tell which declaration failed.
#[derive(Error, Debug)]
pub enum StructuresmithError {
    /// Declaration-level problem (gates entry to the engine)
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Content for a declared file could not be obtained
    #[error("resolving source for '{destination}': {source}")]
    SourceResolution {
        destination: String,
        #[source]
        source: SourceError,
    },

    /// Writing a rendered file failed
    #[error("rendering '{destination}': {source}")]
    Render {
        destination: String,
        #[source]
        source: FsError,
    },

    /// Manifest could not be persisted (loading failures never surface)
    #[error("persisting manifest in {dir}: {source}")]
    Manifest {
        dir: PathBuf,
        #[source]
        source: ManifestError,
    },

    /// A file listed for deletion could not be removed
    #[error("deleting '{destination}': {source}")]
    Deletion {
        destination: String,
        #[source]
        source: FsError,
    },

    /// An empty directory could not be removed after a deletion
    #[error("pruning directory {path}: {source}")]
    Prune {
        path: PathBuf,
        #[source]
        source: FsError,
    },

    /// Another process holds the output directory
    #[error("output directory {dir} is locked: {source}")]
    Locked {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StructuresmithError {
    /// Destination of the declared file this error concerns, if any
    pub fn destination(&self) -> Option<&str> {
        match self {
            StructuresmithError::SourceResolution { destination, .. }
            | StructuresmithError::Render { destination, .. }
            | StructuresmithError::Deletion { destination, .. } => Some(destination),
            _ => None,
        }
    }
}
