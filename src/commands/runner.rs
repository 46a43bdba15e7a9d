//! Runs diff or render across the selected projects

use std::io::Write;
use std::time::Instant;

use anyhow::{bail, Result};
use tracing::{error, info};

use structuresmith::application::{run_bounded, ReconcileOptions, ReconcileReport};
use structuresmith::config::DeclarationFile;
use structuresmith::presentation::{factory, report};

use super::Context;

/// Reconcile each project (dry run or not) with bounded parallelism.
///
/// Every project runs even if a sibling fails; the error lists the failures.
pub fn run_projects(
    ctx: &Context,
    command: &str,
    declarations: &DeclarationFile,
    projects: Vec<String>,
    options: ReconcileOptions,
) -> Result<()> {
    let started = Instant::now();
    let total = projects.len();
    let use_case = factory::create_reconcile_use_case();
    let output_dir = &ctx.settings.output_dir;

    if total > 1 {
        info!(
            projects = total,
            max_parallel = ctx.settings.max_parallel,
            "Processing projects in parallel"
        );
    }

    let outcomes: Vec<(String, Result<ReconcileReport, String>)> =
        run_bounded(projects, ctx.settings.max_parallel, |name| {
            let outcome =
                factory::run_project(&use_case, declarations, &name, output_dir, &options)
                    .map_err(|e| {
                        error!(project = %name, error = %e, "Error processing project");
                        e.to_string()
                    });
            (name, outcome)
        });

    let mut stdout = std::io::stdout().lock();
    let mut failures = Vec::new();
    for (name, outcome) in outcomes {
        match outcome {
            Ok(project_report) if ctx.json => {
                report::write_event(
                    &mut stdout,
                    &report::project_event(command, &name, &project_report),
                )?;
            }
            Ok(project_report) => {
                write!(
                    stdout,
                    "{}",
                    report::render_project(&name, &project_report, ctx.color)
                )?;
            }
            Err(message) => {
                if ctx.json {
                    let event = report::error_event(command, &name, &message);
                    report::write_event(&mut stdout, &event)?;
                }
                failures.push((name, message));
            }
        }
    }

    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Processing completed"
    );

    if failures.is_empty() {
        return Ok(());
    }
    if !ctx.json {
        write!(stdout, "{}", report::render_failures(&failures, total, ctx.color))?;
    }
    stdout.flush()?;

    match failures.as_slice() {
        [(name, message)] if total == 1 => bail!("project {name}: {message}"),
        _ => bail!("{} of {} projects failed", failures.len(), total),
    }
}
