//! Referential-integrity checks run before any command does work

use std::collections::HashSet;

use reqwest::Url;

use crate::domain::value_objects::validate_destination;

use super::types::{DeclarationFile, FileDeclaration};
use super::ConfigError;

/// Validate a loaded declaration file.
///
/// Checks run in a fixed order and the first failure is returned:
/// duplicate project names, each declaration (groups first, then project
/// files), then group references.
pub fn validate(declarations: &DeclarationFile) -> Result<(), ConfigError> {
    check_duplicate_projects(declarations)?;

    for (origin, file) in declarations.declarations() {
        check_declaration(&origin, file)?;
    }

    check_group_references(declarations)
}

fn check_duplicate_projects(declarations: &DeclarationFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in declarations.project_names() {
        check_project_name(name)?;
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateProject(name.to_string()));
        }
    }
    Ok(())
}

/// A project name becomes a directory under the output path
fn check_project_name(name: &str) -> Result<(), ConfigError> {
    let unsafe_name = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\']);
    if unsafe_name {
        return Err(ConfigError::InvalidProjectName(name.to_string()));
    }
    Ok(())
}

fn check_declaration(origin: &str, file: &FileDeclaration) -> Result<(), ConfigError> {
    validate_destination(&file.destination).map_err(|source| {
        ConfigError::InvalidDestination {
            origin: origin.to_string(),
            source,
        }
    })?;

    match file.source_count() {
        0 => {
            return Err(ConfigError::MissingSource {
                destination: file.destination.clone(),
            })
        }
        1 => {}
        _ => {
            return Err(ConfigError::SourceConflict {
                destination: file.destination.clone(),
            })
        }
    }

    if let Some(path) = file.source() {
        if !path.exists() {
            return Err(ConfigError::SourceNotFound {
                destination: file.destination.clone(),
                path: path.clone(),
            });
        }
    }

    if let Some(url) = file.source_url() {
        check_url(&file.destination, url)?;
    }

    Ok(())
}

fn check_url(destination: &str, url: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidUrl {
        destination: destination.to_string(),
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme '{other}'"))),
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".to_string()));
    }
    Ok(())
}

fn check_group_references(declarations: &DeclarationFile) -> Result<(), ConfigError> {
    for project in &declarations.projects {
        for group_ref in &project.groups {
            if !declarations
                .template_groups
                .contains_key(&group_ref.group_name)
            {
                return Err(ConfigError::UnknownGroup {
                    project: project.name.clone(),
                    group: group_ref.group_name.clone(),
                });
            }
        }
    }
    Ok(())
}
