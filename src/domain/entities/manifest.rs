//! Manifest entity - the file set declared by the last successful run
//!
//! The manifest is the reconciliation baseline. It's a pure data structure;
//! I/O is handled by a ManifestRepository.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::{normalize_destination, ContentHash};

/// Manifest entry for a tracked destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    path: String,
    checksum: Option<ContentHash>,
}

impl ManifestEntry {
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: normalize_destination(path.as_ref()),
            checksum: None,
        }
    }

    pub fn with_checksum(mut self, checksum: Option<ContentHash>) -> Self {
        self.checksum = checksum;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Hash of the content last written, if it was recorded
    pub fn checksum(&self) -> Option<&ContentHash> {
        self.checksum.as_ref()
    }
}

/// The manifest records the previously declared file set
///
/// Entries are keyed by destination path, so a path appears at most once.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    generated_at: DateTime<Utc>,
    version: String,
    entries: BTreeMap<String, ManifestEntry>,
}

impl Manifest {
    /// Create an empty manifest stamped with `version` and the current time
    pub fn new(version: impl Into<String>) -> Self {
        Self::at(version, Utc::now())
    }

    /// Create an empty manifest with an explicit timestamp
    pub fn at(version: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            version: version.into(),
            entries: BTreeMap::new(),
        }
    }

    pub fn with_entries(mut self, entries: impl IntoIterator<Item = ManifestEntry>) -> Self {
        for entry in entries {
            self.insert(entry);
        }
        self
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Insert an entry, replacing any entry with the same path
    pub fn insert(&mut self, entry: ManifestEntry) {
        self.entries.insert(entry.path.clone(), entry);
    }

    pub fn get(&self, path: &str) -> Option<&ManifestEntry> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Tracked paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Tracked entries in path order
    pub fn entries(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.values()
    }
}
