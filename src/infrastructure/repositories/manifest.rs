//! JSON Manifest Repository
//!
//! Implements the ManifestRepository port using the `.anvil.lock` JSON format.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::entities::{Manifest, ManifestEntry};
use crate::domain::ports::file_system::FileSystem;
use crate::domain::ports::manifest_repository::{
    ManifestError, ManifestRepository, ManifestResult,
};
use crate::domain::value_objects::{validate_destination, ContentHash, FileMode};
use crate::infrastructure::fs::LocalFs;

/// Manifest file name inside each project output directory
pub const MANIFEST_FILE_NAME: &str = ".anvil.lock";

/// JSON-based manifest repository
///
/// Stores the manifest as `.anvil.lock` in the directory it describes.
pub struct JsonManifestRepository<FS: FileSystem = LocalFs> {
    fs: FS,
    version: String,
}

impl JsonManifestRepository<LocalFs> {
    /// Create a repository on the local file system stamping `version`
    pub fn new(version: impl Into<String>) -> Self {
        Self::with_fs(LocalFs::new(), version)
    }
}

impl<FS: FileSystem> JsonManifestRepository<FS> {
    /// Create with a custom file system (for testing)
    pub fn with_fs(fs: FS, version: impl Into<String>) -> Self {
        Self {
            fs,
            version: version.into(),
        }
    }

    pub fn manifest_path(dir: &Path) -> PathBuf {
        dir.join(MANIFEST_FILE_NAME)
    }
}

/// JSON representation of a file entry
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonFileEntry {
    path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    checksum: String,
}

/// JSON representation of the manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
struct JsonManifest {
    generated_at: DateTime<Utc>,
    #[serde(default)]
    version: String,
    #[serde(default)]
    files: Option<Vec<JsonFileEntry>>,
}

/// Parse `.anvil.lock` content.
///
/// A missing `files` list (or `null`) is an empty manifest. Entries whose
/// path would leave the output root, or name the manifest itself, are
/// dropped with a warning so they are never deleted.
pub fn parse_manifest(content: &[u8]) -> ManifestResult<Manifest> {
    let json: JsonManifest = serde_json::from_slice(content)
        .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;

    let entries = json
        .files
        .unwrap_or_default()
        .into_iter()
        .filter(|entry| match validate_destination(&entry.path) {
            Ok(()) => true,
            Err(e) => {
                warn!(path = %entry.path, error = %e, "Ignoring unsafe manifest entry");
                false
            }
        })
        .map(|entry| {
            let checksum =
                (!entry.checksum.is_empty()).then(|| ContentHash::new(&entry.checksum));
            ManifestEntry::new(entry.path).with_checksum(checksum)
        });

    Ok(Manifest::at(json.version, json.generated_at).with_entries(entries))
}

impl<FS: FileSystem> ManifestRepository for JsonManifestRepository<FS> {
    fn version(&self) -> &str {
        &self.version
    }

    fn load(&self, dir: &Path) -> ManifestResult<Manifest> {
        let path = Self::manifest_path(dir);
        let content = match self.fs.read(&path) {
            Ok(content) => content,
            Err(e) if e.is_not_found() => return Err(ManifestError::NotFound),
            Err(e) => return Err(e.into()),
        };

        parse_manifest(&content)
    }

    fn load_or_new(&self, dir: &Path) -> Manifest {
        match self.load(dir) {
            Ok(manifest) => manifest,
            Err(ManifestError::NotFound) => {
                debug!(dir = %dir.display(), "No manifest yet, starting empty");
                Manifest::new(&self.version)
            }
            Err(e) => {
                warn!(
                    dir = %dir.display(),
                    error = %e,
                    "Could not load manifest, treating every declared file as new"
                );
                Manifest::new(&self.version)
            }
        }
    }

    fn save(&self, dir: &Path, manifest: &Manifest) -> ManifestResult<()> {
        let json = JsonManifest {
            generated_at: manifest.generated_at(),
            version: manifest.version().to_string(),
            files: Some(
                manifest
                    .entries()
                    .map(|entry| JsonFileEntry {
                        path: entry.path().to_string(),
                        checksum: entry
                            .checksum()
                            .map(|c| c.to_string())
                            .unwrap_or_default(),
                    })
                    .collect(),
            ),
        };

        let content = serde_json::to_vec_pretty(&json)
            .map_err(|e| ManifestError::InvalidFormat(e.to_string()))?;
        self.fs.create_dir_all(dir)?;
        self.fs
            .write(&Self::manifest_path(dir), &content, FileMode::DEFAULT)?;

        Ok(())
    }
}
