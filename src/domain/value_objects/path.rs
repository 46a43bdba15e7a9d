//! Destination path helpers
//!
//! Destinations are stored as forward-slash strings relative to a project's
//! output root, so manifests read the same on every platform.

use std::path::{Component, Path, PathBuf};

/// Why a destination is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    #[error("destination is empty")]
    Empty,
    #[error("destination '{0}' must be relative to the output directory")]
    Absolute(String),
    #[error("destination '{0}' contains '..' and would escape the output directory")]
    Traversal(String),
    #[error("destination '{0}' is reserved for the manifest")]
    Reserved(String),
}

/// Names at the output root owned by the manifest and its lock
pub const RESERVED_DESTINATIONS: [&str; 2] = [".anvil.lock", ".anvil.lock.guard"];

/// Normalize a destination for use as a manifest key.
///
/// Backslashes become `/`, `.` segments and empty segments are dropped.
pub fn normalize_destination(destination: &str) -> String {
    destination
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

/// Check that a destination stays inside the output root.
pub fn validate_destination(destination: &str) -> Result<(), DestinationError> {
    let unified = destination.replace('\\', "/");
    if unified.starts_with('/') || Path::new(destination).is_absolute() {
        return Err(DestinationError::Absolute(destination.to_string()));
    }
    if unified.split('/').any(|segment| segment == "..") {
        return Err(DestinationError::Traversal(destination.to_string()));
    }
    let normalized = normalize_destination(destination);
    if normalized.is_empty() {
        return Err(DestinationError::Empty);
    }
    if RESERVED_DESTINATIONS.contains(&normalized.as_str()) {
        return Err(DestinationError::Reserved(destination.to_string()));
    }
    Ok(())
}

/// Join a directory declaration's destination with a path found beneath it.
pub fn join_destination(parent: &str, relative: &Path) -> String {
    let rel: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    normalize_destination(&format!("{}/{}", parent, rel.join("/")))
}

/// Resolve a destination key to a concrete path under `root`.
pub fn resolve_destination(root: &Path, destination: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for segment in normalize_destination(destination).split('/') {
        if !segment.is_empty() {
            path.push(segment);
        }
    }
    path
}
