//! DesiredFile entity - one file a project declares for the current run

use std::path::PathBuf;

use crate::domain::value_objects::{normalize_destination, FileMode};

/// Template parameters attached to a declaration.
///
/// Kept as a YAML mapping so nested mappings and sequences survive exactly as
/// written in the declaration file.
pub type Values = serde_yaml_ng::Mapping;

/// Where a declared file gets its bytes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Literal content written in the declaration
    Content(String),
    /// Remote location fetched over HTTP(S)
    Url(String),
    /// Local template file (or a directory, until it is classified)
    File(PathBuf),
    /// Local directory whose files are each declared separately
    Directory(PathBuf),
}

impl ContentSource {
    /// Short human-readable description for logs
    pub fn describe(&self) -> String {
        match self {
            ContentSource::Content(_) => "inline content".to_string(),
            ContentSource::Url(url) => url.clone(),
            ContentSource::File(path) | ContentSource::Directory(path) => {
                path.display().to_string()
            }
        }
    }
}

/// A file the current declaration wants on disk
///
/// `destination` is the unique key within one run.
#[derive(Debug, Clone, PartialEq)]
pub struct DesiredFile {
    destination: String,
    source: ContentSource,
    values: Values,
    permissions: Option<FileMode>,
    overwrite: Option<bool>,
}

impl DesiredFile {
    pub fn new(destination: impl AsRef<str>, source: ContentSource) -> Self {
        Self {
            destination: normalize_destination(destination.as_ref()),
            source,
            values: Values::new(),
            permissions: None,
            overwrite: None,
        }
    }

    pub fn with_values(mut self, values: Values) -> Self {
        self.values = values;
        self
    }

    pub fn with_permissions(mut self, permissions: Option<FileMode>) -> Self {
        self.permissions = permissions;
        self
    }

    pub fn with_overwrite(mut self, overwrite: Option<bool>) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Declare a file found inside a directory source.
    ///
    /// The child inherits values, permissions and the overwrite flag.
    pub fn child(&self, destination: impl AsRef<str>, path: PathBuf) -> Self {
        Self {
            destination: normalize_destination(destination.as_ref()),
            source: ContentSource::File(path),
            values: self.values.clone(),
            permissions: self.permissions,
            overwrite: self.overwrite,
        }
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn source(&self) -> &ContentSource {
        &self.source
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn permissions(&self) -> Option<FileMode> {
        self.permissions
    }

    /// Permissions to write with, falling back to the default mode
    pub fn effective_permissions(&self) -> FileMode {
        self.permissions.unwrap_or_default()
    }

    pub fn overwrite(&self) -> Option<bool> {
        self.overwrite
    }

    /// Overwrite flag with unset treated as `true`
    pub fn should_overwrite(&self) -> bool {
        self.overwrite.unwrap_or(true)
    }
}
