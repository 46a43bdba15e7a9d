use anyhow::Result;

use structuresmith::application::ReconcileOptions;

use super::runner::run_projects;
use super::{load_declarations, select_projects, Context};

/// Dry run: print what `render` would do, touching nothing
pub fn cmd_diff(ctx: &Context, project: Option<&str>) -> Result<()> {
    let declarations = load_declarations(ctx)?;
    let projects = select_projects(&declarations, project)?;

    run_projects(
        ctx,
        "diff",
        &declarations,
        projects,
        ReconcileOptions::new().with_dry_run(true),
    )
}
