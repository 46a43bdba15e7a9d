//! ManifestRepository port - abstraction for manifest persistence
//!
//! This trait allows the domain layer to load/save manifests
//! without knowing about JSON serialization details.

use std::path::Path;

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::file_system::FsError;

/// Result type for manifest operations
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Manifest operation errors
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// No manifest in the directory (first run)
    #[error("manifest not found")]
    NotFound,
    /// Manifest exists but is not a valid manifest document
    #[error("invalid manifest format: {0}")]
    InvalidFormat(String),
    /// I/O error
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Abstract repository for manifest persistence
///
/// A manifest lives in the output directory it describes.
pub trait ManifestRepository: Send + Sync {
    /// Version tag stamped into manifests this repository creates
    fn version(&self) -> &str;

    /// Load the manifest stored in `dir`
    fn load(&self, dir: &Path) -> ManifestResult<Manifest>;

    /// Load the manifest stored in `dir`, or an empty one if it is absent or
    /// unreadable
    fn load_or_new(&self, dir: &Path) -> Manifest;

    /// Replace the manifest stored in `dir`, creating `dir` if needed
    fn save(&self, dir: &Path, manifest: &Manifest) -> ManifestResult<()>;

    /// Build a fresh manifest from `entries`
    fn create(&self, entries: Vec<ManifestEntry>) -> Manifest {
        Manifest::new(self.version()).with_entries(entries)
    }
}
