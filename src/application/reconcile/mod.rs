//! Reconcile Use Case
//!
//! Brings one project's output tree in line with its desired set.
//!
//! This module handles:
//! - Loading the manifest from the previous run
//! - Diffing it against the desired set and applying the overwrite overlay
//! - Rendering new and kept files, deleting orphans, pruning empty directories
//! - Persisting the new manifest

mod options;
mod result;
mod use_case;

pub use options::ReconcileOptions;
pub use result::{ReconcileReport, WrittenFile};
pub use use_case::ReconcileUseCase;
