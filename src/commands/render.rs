use anyhow::Result;

use structuresmith::application::ReconcileOptions;

use super::runner::run_projects;
use super::{load_declarations, select_projects, Context};

pub fn cmd_render(ctx: &Context, project: Option<&str>) -> Result<()> {
    let declarations = load_declarations(ctx)?;
    let projects = select_projects(&declarations, project)?;

    run_projects(ctx, "render", &declarations, projects, ReconcileOptions::new())
}
