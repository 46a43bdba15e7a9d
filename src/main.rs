//! Structuresmith CLI
//!
//! Usage: structuresmith <COMMAND>
//!
//! Commands:
//!   validate  Validate the YAML configuration
//!   diff      Show what a render would create, overwrite, skip or delete
//!   render    Write the templated files to disk

use anyhow::Result;
use clap::Parser;

use structuresmith::presentation::{Cli, Commands};

mod commands;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    structuresmith::logging::init_tracing(cli.verbose, cli.json);

    let ctx = commands::Context::from_cli(&cli)?;
    match &cli.command {
        Commands::Validate => commands::validate::cmd_validate(&ctx),
        Commands::Diff { project } => commands::diff::cmd_diff(&ctx, project.as_deref()),
        Commands::Render { project } => commands::render::cmd_render(&ctx, project.as_deref()),
    }
}
