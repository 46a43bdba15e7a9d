//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `report` - Diff report, summaries and NDJSON events
//! - `theme` - Colors and color detection
//!
//! ## Usage
//!
//! ```ignore
//! use structuresmith::presentation::factory;
//!
//! let use_case = factory::create_reconcile_use_case();
//! let report = factory::run_project(&use_case, &declarations, "app", &output, &options)?;
//! ```

pub mod cli;
pub mod factory;
pub mod report;
pub mod theme;

pub use cli::{Cli, ColorWhen, Commands};
pub use factory::{create_reconcile_use_case, project_output_root, run_project};
