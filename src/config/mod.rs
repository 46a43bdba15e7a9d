//! Configuration module for Structuresmith
//!
//! Two kinds of configuration feed a run:
//! 1. The declaration file (`anvil.yml`) describing projects and template groups
//! 2. Run settings, resolved from CLI flags, then `STRUCTURESMITH_*`
//!    environment variables, then built-in defaults

mod loader;
mod settings;
mod types;
mod validate;

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::value_objects::DestinationError;

pub use loader::{load, load_with_warnings, ConfigWarning};
pub use settings::{with_env_overrides, Settings, SettingsOverrides, DEFAULT_CONFIG_FILE};
pub use types::{DeclarationFile, FileDeclaration, GroupRef, ProjectConfig};
pub use validate::validate;

/// Problems with the declaration file or run settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("duplicate project name: {0}")]
    DuplicateProject(String),

    #[error("invalid project name '{0}': must be a single directory name")]
    InvalidProjectName(String),

    #[error("project {0} not found in configuration")]
    ProjectNotFound(String),

    #[error("project {project} refers to non-existent group: {group}")]
    UnknownGroup { project: String, group: String },

    #[error("'{destination}' sets more than one of source, sourceUrl and content")]
    SourceConflict { destination: String },

    #[error("'{destination}' sets none of source, sourceUrl and content")]
    MissingSource { destination: String },

    #[error("template file or directory not found for '{destination}': {}", path.display())]
    SourceNotFound { destination: String, path: PathBuf },

    #[error("invalid sourceUrl for '{destination}': {url} ({reason})")]
    InvalidUrl {
        destination: String,
        url: String,
        reason: String,
    },

    #[error("invalid destination in {origin}: {source}")]
    InvalidDestination {
        origin: String,
        #[source]
        source: DestinationError,
    },

    #[error("project {project} declares '{destination}' more than once")]
    DuplicateDestination {
        project: String,
        destination: String,
    },

    #[error("invalid setting {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },
}
