//! Report rendering
//!
//! Text output is the aligned diff report plus a one-line summary per
//! project. JSON output is NDJSON: one object per line, one line per project.

use std::io::{self, Write};

use serde_json::json;

use crate::application::ReconcileReport;
use crate::domain::services::{DiffResult, FileStatus};

use super::theme::{colors, paint};

/// Column gap between the status prefix and the path
const PADDING: usize = 2;

fn status_color(status: FileStatus) -> crossterm::style::Color {
    match status {
        FileStatus::New => colors::SUCCESS,
        FileStatus::Deleted => colors::ERROR,
        FileStatus::Kept => colors::WARNING,
        FileStatus::Skipped => colors::INFO,
    }
}

/// One line per path, sorted by path, prefixes padded into a column
pub fn render_diff(diff: &DiffResult, color: bool) -> String {
    let entries = diff.entries();
    let width = entries
        .iter()
        .map(|(status, _)| status.prefix().len())
        .max()
        .unwrap_or(0)
        + PADDING;

    let mut out = String::new();
    for (status, path) in entries {
        let prefix = status.prefix();
        out.push_str(&paint(prefix, status_color(status), color));
        out.push_str(&" ".repeat(width - prefix.len()));
        out.push_str(path);
        out.push('\n');
    }
    out
}

/// Summary line for one project
pub fn render_summary(project: &str, report: &ReconcileReport, color: bool) -> String {
    let diff = &report.diff;
    let counts = format!(
        "{} new, {} deleted, {} overwritten, {} skipped",
        diff.new.len(),
        diff.deleted.len(),
        diff.kept.len(),
        diff.skipped.len()
    );

    let name = paint(project, colors::INFO, color);
    if report.dry_run {
        return format!("{name}: {counts} {}\n", paint("(dry run)", colors::DIM, color));
    }

    let mut line = format!("{name}: {counts}");
    if !report.pruned.is_empty() {
        line.push_str(&format!(", {} empty directories removed", report.pruned.len()));
    }
    line.push('\n');
    line
}

/// Full text report for one project: diff lines, then the summary
pub fn render_project(project: &str, report: &ReconcileReport, color: bool) -> String {
    let mut out = String::from("\n");
    out.push_str(&render_diff(&report.diff, color));
    out.push('\n');
    out.push_str(&render_summary(project, report, color));
    out
}

/// Closing block listing projects that failed
pub fn render_failures(failures: &[(String, String)], total: usize, color: bool) -> String {
    let mut out = String::new();
    if failures.is_empty() {
        return out;
    }

    let header = format!("{} of {} projects failed:", failures.len(), total);
    out.push('\n');
    out.push_str(&paint(&header, colors::ERROR, color));
    out.push('\n');
    for (project, message) in failures {
        out.push_str(&format!("  {project}: {message}\n"));
    }
    out
}

/// NDJSON event for a finished project
pub fn project_event(command: &str, project: &str, report: &ReconcileReport) -> serde_json::Value {
    let files: Vec<_> = report
        .diff
        .entries()
        .into_iter()
        .map(|(status, path)| json!({ "path": path, "status": status.as_str() }))
        .collect();

    json!({
        "event": "project",
        "command": command,
        "project": project,
        "output": report.output_root.display().to_string(),
        "dry_run": report.dry_run,
        "files": files,
        "written": report.written.iter().map(|w| json!({
            "path": w.destination,
            "checksum": w.checksum.as_str(),
        })).collect::<Vec<_>>(),
        "deleted": report.deleted,
        "pruned": report.pruned.iter().map(|p| p.display().to_string()).collect::<Vec<_>>(),
        "success": true,
    })
}

/// NDJSON event for a project that failed
pub fn error_event(command: &str, project: &str, message: &str) -> serde_json::Value {
    json!({
        "event": "project",
        "command": command,
        "project": project,
        "success": false,
        "error": message,
    })
}

/// Write a single NDJSON event (one JSON object per line).
pub fn write_event(out: &mut impl Write, event: &serde_json::Value) -> io::Result<()> {
    let line = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}
