use anyhow::Result;

use structuresmith::presentation::report;
use structuresmith::presentation::theme::{colors, paint};

use super::{load_declarations, Context};

pub fn cmd_validate(ctx: &Context) -> Result<()> {
    let declarations = load_declarations(ctx)?;
    let projects = declarations.projects.len();
    let groups = declarations.template_groups.len();

    if ctx.json {
        let mut out = std::io::stdout().lock();
        report::write_event(
            &mut out,
            &serde_json::json!({
                "event": "complete",
                "command": "validate",
                "config": ctx.settings.config_path.display().to_string(),
                "projects": projects,
                "template_groups": groups,
                "success": true,
            }),
        )?;
    } else {
        println!(
            "{} {} ({} projects, {} template groups)",
            paint("valid:", colors::SUCCESS, ctx.color),
            ctx.settings.config_path.display(),
            projects,
            groups
        );
    }
    Ok(())
}
