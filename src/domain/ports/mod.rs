//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod manifest_repository;
pub mod source_resolver;

pub use file_system::{FileSystem, FsError, FsResult};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use source_resolver::{SourceError, SourceResolver, SourceResult};
