//! Structuresmith - declarative project file generator
//!
//! Projects and reusable template groups are declared in one YAML file.
//! Each run renders every declared file into the project's output tree,
//! deletes files that were declared last time but no longer are, and records
//! the declared set in a manifest (`.anvil.lock`) for the next run.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{ReconcileOptions, ReconcileReport, ReconcileUseCase};
pub use config::{DeclarationFile, Settings};
pub use domain::entities::{ContentSource, DesiredFile, Manifest, ManifestEntry};
pub use domain::services::{merge_values, DiffResult, FileStatus, Reconciler};
pub use error::{StructuresmithError, StructuresmithResult};
