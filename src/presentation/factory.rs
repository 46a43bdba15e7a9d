//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{ReconcileOptions, ReconcileReport, ReconcileUseCase};
use crate::config::DeclarationFile;
use crate::error::StructuresmithResult;
use crate::infrastructure::{FsSourceResolver, JsonManifestRepository, LocalFs, OutputLock};

/// Type alias for the concrete ReconcileUseCase with all dependencies
pub type ConcreteReconcileUseCase =
    ReconcileUseCase<JsonManifestRepository, LocalFs, FsSourceResolver>;

/// Create a reconcile use case with all dependencies wired up
///
/// Manifests are stamped with this build's version.
pub fn create_reconcile_use_case() -> ConcreteReconcileUseCase {
    let manifests = JsonManifestRepository::new(env!("CARGO_PKG_VERSION"));
    let file_system = LocalFs::new();
    let resolver = FsSourceResolver::new();

    ReconcileUseCase::new(manifests, file_system, resolver)
}

/// Output root of a project: `<output_dir>/<project>`
pub fn project_output_root(output_dir: &Path, project: &str) -> PathBuf {
    output_dir.join(project)
}

/// Reconcile one named project.
///
/// In write mode the project's output root is locked for the whole run.
pub fn run_project(
    use_case: &ConcreteReconcileUseCase,
    declarations: &DeclarationFile,
    project: &str,
    output_dir: &Path,
    options: &ReconcileOptions,
) -> StructuresmithResult<ReconcileReport> {
    let config = declarations.find_project(project)?;
    let root = project_output_root(output_dir, &config.name);

    let _lock = if options.dry_run {
        None
    } else {
        Some(OutputLock::acquire(&root)?)
    };

    use_case.execute_project(config, &declarations.template_groups, &root, options)
}
