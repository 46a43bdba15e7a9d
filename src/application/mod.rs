//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ReconcileUseCase` - load manifest, diff, render, delete, prune, save manifest
//! - `ProjectExpander` - flattens a project and its group references into desired files
//! - `run_bounded` - runs independent projects with a parallelism cap

pub mod batch;
pub mod expand;
pub mod reconcile;

pub use batch::run_bounded;
pub use expand::ProjectExpander;
pub use reconcile::{ReconcileOptions, ReconcileReport, ReconcileUseCase, WrittenFile};
