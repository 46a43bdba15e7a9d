//! Output directory lock
//!
//! An exclusive advisory lock held while a project is reconciled in write
//! mode. Two processes rendering into the same output tree serialize on it.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{StructuresmithError, StructuresmithResult};

/// Lock file name, next to the manifest
pub const LOCK_FILE_NAME: &str = ".anvil.lock.guard";

/// Guard holding the exclusive lock; released on drop
#[derive(Debug)]
pub struct OutputLock {
    file: File,
    path: PathBuf,
}

impl OutputLock {
    /// Block until the lock for `dir` is acquired
    pub fn acquire(dir: &Path) -> StructuresmithResult<Self> {
        let locked = |source| StructuresmithError::Locked {
            dir: dir.to_path_buf(),
            source,
        };

        fs::create_dir_all(dir).map_err(locked)?;
        let path = dir.join(LOCK_FILE_NAME);
        let file = File::create(&path).map_err(locked)?;
        file.lock_exclusive().map_err(locked)?;

        debug!(path = %path.display(), "Acquired output lock");
        Ok(Self { file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for OutputLock {
    fn drop(&mut self) {
        // The guard file stays: removing it would let a waiting process lock
        // an unlinked inode while a newcomer locks a fresh one.
        let _ = self.file.unlock();
    }
}
