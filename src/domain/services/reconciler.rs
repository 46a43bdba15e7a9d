//! Reconciliation service
//!
//! Pure domain logic that compares the manifest from the previous run with
//! the files declared now. It decides what is new, what is gone and what is
//! kept; the overwrite overlay then decides which of those may be written.
//! No I/O happens here: the existence check is supplied by the caller.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::{DesiredFile, Manifest, ManifestEntry};
use crate::domain::ports::{FsResult, SourceError};
use crate::error::{StructuresmithError, StructuresmithResult};

/// Category of a path in a [`DiffResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FileStatus {
    /// Declared now, not in the manifest
    New,
    /// In the manifest, no longer declared
    Deleted,
    /// Declared now and in the manifest
    Kept,
    /// Declared, but left alone because it exists and overwrite is off
    Skipped,
}

impl FileStatus {
    /// Prefix used in the diff report
    pub fn prefix(self) -> &'static str {
        match self {
            FileStatus::New => "new:",
            FileStatus::Deleted => "delete:",
            FileStatus::Kept => "overwrite:",
            FileStatus::Skipped => "skip:",
        }
    }

    /// Lowercase name used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::New => "new",
            FileStatus::Deleted => "delete",
            FileStatus::Kept => "overwrite",
            FileStatus::Skipped => "skip",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of comparing a manifest with a desired set
///
/// `new`, `kept` and `skipped` partition the desired set. `deleted` holds the
/// manifest entries that are no longer declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiffResult {
    pub new: Vec<DesiredFile>,
    pub deleted: Vec<ManifestEntry>,
    pub kept: Vec<DesiredFile>,
    pub skipped: Vec<DesiredFile>,
}

impl DiffResult {
    /// Every path with its status, sorted by path
    pub fn entries(&self) -> Vec<(FileStatus, &str)> {
        let mut entries: Vec<(FileStatus, &str)> = self
            .new
            .iter()
            .map(|f| (FileStatus::New, f.destination()))
            .chain(self.deleted.iter().map(|e| (FileStatus::Deleted, e.path())))
            .chain(self.kept.iter().map(|f| (FileStatus::Kept, f.destination())))
            .chain(self.skipped.iter().map(|f| (FileStatus::Skipped, f.destination())))
            .collect();
        entries.sort_by(|a, b| a.1.cmp(b.1).then(a.0.cmp(&b.0)));
        entries
    }

    /// Files that will be written in write mode
    pub fn to_write(&self) -> impl Iterator<Item = &DesiredFile> {
        self.new.iter().chain(self.kept.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.new.is_empty()
            && self.deleted.is_empty()
            && self.kept.is_empty()
            && self.skipped.is_empty()
    }

    pub fn total(&self) -> usize {
        self.new.len() + self.deleted.len() + self.kept.len() + self.skipped.len()
    }
}

/// Computes diffs and applies the overwrite overlay
pub struct Reconciler;

impl Reconciler {
    /// Compare the manifest with the desired set.
    ///
    /// Matching is by destination path only. Declaration order is kept for
    /// `new` and `kept`; `deleted` follows manifest (path) order.
    pub fn diff(manifest: &Manifest, desired: &[DesiredFile]) -> DiffResult {
        let mut result = DiffResult::default();
        let declared: HashSet<&str> = desired.iter().map(|f| f.destination()).collect();

        for file in desired {
            if manifest.contains(file.destination()) {
                result.kept.push(file.clone());
            } else {
                result.new.push(file.clone());
            }
        }

        result.deleted = manifest
            .paths()
            .filter(|path| !declared.contains(path))
            .map(ManifestEntry::new)
            .collect();

        result
    }

    /// Move files that must not be overwritten into `skipped`.
    ///
    /// A New or Kept file is skipped when its overwrite flag is off and its
    /// destination already exists. Deleted entries are never touched. An
    /// existence check that fails for a reason other than "not found" aborts
    /// with the destination identified.
    pub fn apply_skip_overlay<F>(
        diff: DiffResult,
        mut exists: F,
    ) -> StructuresmithResult<DiffResult>
    where
        F: FnMut(&str) -> FsResult<bool>,
    {
        let DiffResult {
            new,
            deleted,
            kept,
            mut skipped,
        } = diff;

        let mut partition = |files: Vec<DesiredFile>| -> StructuresmithResult<Vec<DesiredFile>> {
            let mut writable = Vec::with_capacity(files.len());
            for file in files {
                if !file.should_overwrite()
                    && Self::check_exists(&mut exists, file.destination())?
                {
                    skipped.push(file);
                } else {
                    writable.push(file);
                }
            }
            Ok(writable)
        };

        let new = partition(new)?;
        let kept = partition(kept)?;

        Ok(DiffResult {
            new,
            deleted,
            kept,
            skipped,
        })
    }

    fn check_exists<F>(exists: &mut F, destination: &str) -> StructuresmithResult<bool>
    where
        F: FnMut(&str) -> FsResult<bool>,
    {
        match exists(destination) {
            Ok(found) => Ok(found),
            Err(err) if err.is_not_found() => Ok(false),
            Err(err) => Err(StructuresmithError::SourceResolution {
                destination: destination.to_string(),
                source: SourceError::Fs(err),
            }),
        }
    }
}
