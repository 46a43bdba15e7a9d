//! Domain Entities
//!
//! - `DesiredFile` - A file the current declaration wants on disk
//! - `Manifest` - The file set recorded by the last successful run

mod desired_file;
mod manifest;

pub use desired_file::{ContentSource, DesiredFile, Values};
pub use manifest::{Manifest, ManifestEntry};
