//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Local file system and the output directory lock
//! - `repositories/` - Manifest persistence
//! - `sources/` - Source resolution (local files, directories, HTTP)

pub mod fs;
pub mod repositories;
pub mod sources;

// Re-export for convenience
pub use fs::{LocalFs, OutputLock};
pub use repositories::{parse_manifest, JsonManifestRepository, MANIFEST_FILE_NAME};
pub use sources::FsSourceResolver;
