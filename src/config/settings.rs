//! Run settings
//!
//! Precedence, highest first: CLI flags, `STRUCTURESMITH_*` environment
//! variables, built-in defaults.

use std::num::NonZeroUsize;
use std::path::PathBuf;

use super::ConfigError;

pub const DEFAULT_CONFIG_FILE: &str = "anvil.yml";
const DEFAULT_OUTPUT_DIR: &str = "out";
const DEFAULT_TEMPLATES_DIR: &str = "templates";

/// Resolved settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Declaration file
    pub config_path: PathBuf,
    /// Root under which each project gets its own subdirectory
    pub output_dir: PathBuf,
    /// Prefix for local `source` paths
    pub templates_dir: PathBuf,
    /// Upper bound on projects reconciled at once
    pub max_parallel: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            templates_dir: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            max_parallel: std::thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1),
        }
    }
}

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    pub config_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub templates_dir: Option<PathBuf>,
    pub max_parallel: Option<usize>,
}

impl Settings {
    /// Defaults, then environment, then explicit overrides
    pub fn resolve(overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        with_env_overrides(Settings::default())?.apply(overrides)
    }

    fn apply(mut self, overrides: SettingsOverrides) -> Result<Self, ConfigError> {
        if let Some(path) = overrides.config_path {
            self.config_path = path;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(dir) = overrides.templates_dir {
            self.templates_dir = dir;
        }
        if let Some(n) = overrides.max_parallel {
            self.max_parallel = n;
        }
        if self.max_parallel == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "max-parallel",
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(self)
    }
}

/// Apply environment variable overrides (STRUCTURESMITH_* prefix)
pub fn with_env_overrides(settings: Settings) -> Result<Settings, ConfigError> {
    apply_env(settings, |key| std::env::var(key).ok())
}

pub(crate) fn apply_env<F>(mut settings: Settings, lookup: F) -> Result<Settings, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let set = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    // STRUCTURESMITH_CONFIG
    if let Some(path) = set("STRUCTURESMITH_CONFIG") {
        settings.config_path = PathBuf::from(path);
    }

    // STRUCTURESMITH_OUTPUT
    if let Some(dir) = set("STRUCTURESMITH_OUTPUT") {
        settings.output_dir = PathBuf::from(dir);
    }

    // STRUCTURESMITH_TEMPLATES
    if let Some(dir) = set("STRUCTURESMITH_TEMPLATES") {
        settings.templates_dir = PathBuf::from(dir);
    }

    // STRUCTURESMITH_MAX_PARALLEL
    if let Some(raw) = set("STRUCTURESMITH_MAX_PARALLEL") {
        settings.max_parallel =
            raw.trim()
                .parse()
                .map_err(|e: std::num::ParseIntError| ConfigError::InvalidSetting {
                    name: "STRUCTURESMITH_MAX_PARALLEL",
                    message: e.to_string(),
                })?;
    }

    Ok(settings)
}
