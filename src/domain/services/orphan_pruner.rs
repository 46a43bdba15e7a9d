//! Orphan directory pruning
//!
//! After a deleted file is removed, the directories that held it may be left
//! empty. They are removed upward until a non-empty directory or the output
//! root is reached. The output root itself is never removed.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::ports::{FileSystem, FsError};
use crate::error::{StructuresmithError, StructuresmithResult};

/// Removes directories left empty by deletions
pub struct OrphanPruner<'a, FS: FileSystem + ?Sized> {
    fs: &'a FS,
}

impl<'a, FS: FileSystem + ?Sized> OrphanPruner<'a, FS> {
    pub fn new(fs: &'a FS) -> Self {
        Self { fs }
    }

    /// Walk upward from `dir` removing empty directories.
    ///
    /// Returns the directories actually removed, deepest first. A directory
    /// that is already gone is skipped over; `dir` outside `output_root` is a
    /// no-op.
    pub fn prune(&self, dir: &Path, output_root: &Path) -> StructuresmithResult<Vec<PathBuf>> {
        let mut removed = Vec::new();
        let mut current = dir;

        while current != output_root && current.starts_with(output_root) {
            match self.fs.is_empty_dir(current) {
                Ok(true) => {}
                Ok(false) => break,
                Err(FsError::NotFound(_)) => {
                    current = match current.parent() {
                        Some(parent) => parent,
                        None => break,
                    };
                    continue;
                }
                Err(source) => return Err(prune_error(current, source)),
            }

            match self.fs.remove_dir(current) {
                Ok(()) => {
                    debug!(path = %current.display(), "Removed empty directory");
                    removed.push(current.to_path_buf());
                }
                Err(FsError::NotFound(_)) => {}
                // Something was written into it after the emptiness check
                Err(FsError::NotEmpty(_)) => break,
                Err(source) => return Err(prune_error(current, source)),
            }

            current = match current.parent() {
                Some(parent) => parent,
                None => break,
            };
        }

        Ok(removed)
    }
}

fn prune_error(path: &Path, source: FsError) -> StructuresmithError {
    StructuresmithError::Prune {
        path: path.to_path_buf(),
        source,
    }
}
