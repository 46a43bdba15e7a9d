//! Reconcile result types

use std::path::PathBuf;

use crate::domain::services::DiffResult;
use crate::domain::value_objects::ContentHash;

/// A file written during the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub destination: String,
    pub checksum: ContentHash,
}

/// Outcome of reconciling one project
#[derive(Debug, Clone, Default)]
pub struct ReconcileReport {
    /// Output root the project was reconciled into
    pub output_root: PathBuf,
    /// Whether this was a dry run (nothing below was performed)
    pub dry_run: bool,
    /// The plan, after the overwrite overlay
    pub diff: DiffResult,
    /// Files rendered to disk
    pub written: Vec<WrittenFile>,
    /// Destinations removed
    pub deleted: Vec<String>,
    /// Directories removed because they became empty
    pub pruned: Vec<PathBuf>,
}

impl ReconcileReport {
    pub fn new(output_root: PathBuf, dry_run: bool, diff: DiffResult) -> Self {
        Self {
            output_root,
            dry_run,
            diff,
            ..Default::default()
        }
    }

    pub fn skipped_count(&self) -> usize {
        self.diff.skipped.len()
    }
}
