//! Reconcile Use Case
//!
//! Orchestrates one project's reconciliation:
//! load manifest -> diff -> overwrite overlay -> render -> delete -> prune -> save manifest

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::application::expand::ProjectExpander;
use crate::config::{FileDeclaration, ProjectConfig};
use crate::domain::entities::{DesiredFile, ManifestEntry};
use crate::domain::ports::{FileSystem, ManifestRepository, SourceResolver};
use crate::domain::services::{render_or_copy, DiffResult, OrphanPruner, Reconciler};
use crate::domain::value_objects::{resolve_destination, ContentHash};
use crate::error::{StructuresmithError, StructuresmithResult};

use super::options::ReconcileOptions;
use super::result::{ReconcileReport, WrittenFile};

/// Reconcile use case - keeps an output tree in line with its declarations
pub struct ReconcileUseCase<MR, FS, SR>
where
    MR: ManifestRepository,
    FS: FileSystem,
    SR: SourceResolver,
{
    manifests: MR,
    fs: FS,
    resolver: SR,
}

impl<MR, FS, SR> ReconcileUseCase<MR, FS, SR>
where
    MR: ManifestRepository,
    FS: FileSystem,
    SR: SourceResolver,
{
    /// Create a new reconcile use case
    pub fn new(manifests: MR, fs: FS, resolver: SR) -> Self {
        Self {
            manifests,
            fs,
            resolver,
        }
    }

    /// Expand `project` and reconcile it into `output_root`
    pub fn execute_project(
        &self,
        project: &ProjectConfig,
        groups: &BTreeMap<String, Vec<FileDeclaration>>,
        output_root: &Path,
        options: &ReconcileOptions,
    ) -> StructuresmithResult<ReconcileReport> {
        let started = Instant::now();
        info!(project = %project.name, dry_run = options.dry_run, "Processing project");

        let desired = ProjectExpander::new(&self.resolver).expand(project, groups)?;
        let report = self.execute(desired, output_root, options)?;

        info!(
            project = %project.name,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Finished project"
        );
        Ok(report)
    }

    /// Compute the plan: manifest diff plus the overwrite overlay.
    ///
    /// Never writes.
    pub fn plan(
        &self,
        desired: &[DesiredFile],
        output_root: &Path,
    ) -> StructuresmithResult<DiffResult> {
        let manifest = self.manifests.load_or_new(output_root);
        let diff = Reconciler::diff(&manifest, desired);
        Reconciler::apply_skip_overlay(diff, |destination| {
            self.fs.exists(&resolve_destination(output_root, destination))
        })
    }

    /// Reconcile `desired` into `output_root`.
    ///
    /// In dry-run mode only the plan is computed. Otherwise files are
    /// rendered, orphans deleted and pruned, and the manifest replaced last;
    /// any failure before that leaves the previous manifest in place.
    pub fn execute(
        &self,
        desired: Vec<DesiredFile>,
        output_root: &Path,
        options: &ReconcileOptions,
    ) -> StructuresmithResult<ReconcileReport> {
        let diff = self.plan(&desired, output_root)?;
        let mut report = ReconcileReport::new(output_root.to_path_buf(), options.dry_run, diff);
        if options.dry_run {
            return Ok(report);
        }

        let mut checksums: HashMap<String, ContentHash> = HashMap::new();

        for file in report.diff.to_write() {
            let checksum = self.render_file(file, output_root)?;
            checksums.insert(file.destination().to_string(), checksum.clone());
            report.written.push(WrittenFile {
                destination: file.destination().to_string(),
                checksum,
            });
        }

        for file in &report.diff.skipped {
            let path = resolve_destination(output_root, file.destination());
            info!(
                path = %path.display(),
                "Skipping (file exists and overwrite is disabled)"
            );
            match self.fs.hash(&path) {
                Ok(hash) => {
                    checksums.insert(file.destination().to_string(), hash);
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Could not hash skipped file");
                }
            }
        }

        let pruner = OrphanPruner::new(&self.fs);
        for entry in &report.diff.deleted {
            let path = resolve_destination(output_root, entry.path());
            info!(path = %path.display(), "Deleting");
            match self.fs.remove(&path) {
                Ok(()) => {}
                Err(e) if e.is_not_found() => {
                    debug!(path = %path.display(), "Already gone");
                }
                Err(source) => {
                    return Err(StructuresmithError::Deletion {
                        destination: entry.path().to_string(),
                        source,
                    })
                }
            }
            report.deleted.push(entry.path().to_string());

            if let Some(parent) = path.parent() {
                report.pruned.extend(pruner.prune(parent, output_root)?);
            }
        }

        let entries = desired.iter().map(|file| {
            ManifestEntry::new(file.destination())
                .with_checksum(checksums.get(file.destination()).cloned())
        });
        let manifest = self.manifests.create(entries.collect());
        self.manifests
            .save(output_root, &manifest)
            .map_err(|source| StructuresmithError::Manifest {
                dir: output_root.to_path_buf(),
                source,
            })?;

        Ok(report)
    }

    /// Resolve, render and write one file. Returns the hash of what was written.
    fn render_file(
        &self,
        file: &DesiredFile,
        output_root: &Path,
    ) -> StructuresmithResult<ContentHash> {
        let path = resolve_destination(output_root, file.destination());
        info!(path = %path.display(), "Processing");
        debug!(source = %file.source().describe(), "Resolving source");

        let raw = self.resolver.resolve(file.source()).map_err(|source| {
            StructuresmithError::SourceResolution {
                destination: file.destination().to_string(),
                source,
            }
        })?;
        let rendered = render_or_copy(&raw, file.values());

        self.fs
            .write(&path, &rendered, file.effective_permissions())
            .map_err(|source| StructuresmithError::Render {
                destination: file.destination().to_string(),
                source,
            })?;

        Ok(ContentHash::from_bytes(&rendered))
    }
}
