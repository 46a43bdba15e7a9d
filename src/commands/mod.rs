//! Command handlers for the CLI

pub mod diff;
pub mod render;
mod runner;
pub mod validate;

use anyhow::{Context as _, Result};
use tracing::warn;

use structuresmith::config::{self, DeclarationFile, Settings};
use structuresmith::presentation::{theme, Cli};

/// Settings and output mode shared by every command
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: Settings,
    pub json: bool,
    pub color: bool,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = Settings::resolve(cli.overrides())?;
        Ok(Self {
            settings,
            json: cli.json,
            color: !cli.json && theme::use_color(cli.color),
        })
    }
}

/// Load the declaration file, log its warnings and validate it
pub fn load_declarations(ctx: &Context) -> Result<DeclarationFile> {
    let (declarations, warnings) =
        config::load_with_warnings(&ctx.settings.config_path, &ctx.settings.templates_dir)
            .context("Error reading config")?;

    for warning in &warnings {
        warn!("{warning}");
    }

    config::validate(&declarations).context("Configuration validation error")?;
    Ok(declarations)
}

/// The projects a command operates on: the named one, or all of them
pub fn select_projects(
    declarations: &DeclarationFile,
    project: Option<&str>,
) -> Result<Vec<String>> {
    match project {
        Some(name) => {
            declarations.find_project(name)?;
            Ok(vec![name.to_string()])
        }
        None => Ok(declarations.project_names().map(str::to_string).collect()),
    }
}
