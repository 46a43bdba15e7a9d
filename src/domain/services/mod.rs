//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! The only I/O they perform goes through the ports they are handed.

mod orphan_pruner;
mod reconciler;
mod renderer;
mod value_merger;

pub use orphan_pruner::OrphanPruner;
pub use reconciler::{DiffResult, FileStatus, Reconciler};
pub use renderer::{copy_raw, render_or_copy, render_template, TemplateError, NO_VALUE};
pub use value_merger::merge_values;
