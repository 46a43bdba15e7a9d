//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose and the path/parallelism
//!   settings) are inherited by all subcommands
//! - Path flags left unset fall back to `STRUCTURESMITH_*` variables, then
//!   defaults (see [`crate::config::Settings`])

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SettingsOverrides;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Structuresmith - declarative project file generator
#[derive(Parser, Debug)]
#[command(name = "structuresmith")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (one JSON object per line)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to the YAML configuration file [default: anvil.yml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output path prefix for generated files [default: out]
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Directory where template files are stored [default: templates]
    #[arg(short, long, global = true)]
    pub templates: Option<PathBuf>,

    /// Maximum number of projects to process in parallel [default: CPU count]
    #[arg(short = 'p', long, global = true)]
    pub max_parallel: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validates the YAML configuration
    Validate,

    /// Performs a dry-run to show file paths that would be created or deleted
    Diff {
        /// The project in the config to diff (all projects when omitted)
        project: Option<String>,
    },

    /// Writes the templated files to disk
    Render {
        /// The project in the config to render (all projects when omitted)
        project: Option<String>,
    },
}

impl Cli {
    /// Settings given explicitly on the command line
    pub fn overrides(&self) -> SettingsOverrides {
        SettingsOverrides {
            config_path: self.config.clone(),
            output_dir: self.output.clone(),
            templates_dir: self.templates.clone(),
            max_parallel: self.max_parallel,
        }
    }
}
