//! Declaration file type definitions

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ContentSource, DesiredFile, Values};
use crate::domain::value_objects::FileMode;

use super::ConfigError;

/// Parsed declaration file (`anvil.yml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationFile {
    /// Reusable file lists, referenced from projects by name
    #[serde(default)]
    pub template_groups: BTreeMap<String, Vec<FileDeclaration>>,

    #[serde(default)]
    pub projects: Vec<ProjectConfig>,
}

impl DeclarationFile {
    pub fn find_project(&self, name: &str) -> Result<&ProjectConfig, ConfigError> {
        self.projects
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ConfigError::ProjectNotFound(name.to_string()))
    }

    pub fn project_names(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.name.as_str())
    }

    /// Every declaration with a label saying where it was declared
    pub fn declarations(&self) -> impl Iterator<Item = (String, &FileDeclaration)> {
        let groups = self.template_groups.iter().flat_map(|(name, files)| {
            files
                .iter()
                .map(move |file| (format!("template group '{name}'"), file))
        });
        let projects = self.projects.iter().flat_map(|project| {
            project
                .files
                .iter()
                .map(move |file| (format!("project '{}'", project.name), file))
        });
        groups.chain(projects)
    }

    /// Prefix every local `source` with the templates directory
    pub(crate) fn prefix_sources(&mut self, templates_dir: &std::path::Path) {
        let files = self
            .template_groups
            .values_mut()
            .flat_map(|files| files.iter_mut())
            .chain(self.projects.iter_mut().flat_map(|p| p.files.iter_mut()));
        for file in files {
            if let Some(source) = file.source.as_mut() {
                if !source.as_os_str().is_empty() {
                    *source = templates_dir.join(&*source);
                }
            }
        }
    }
}

/// One project: an output subtree with its own manifest
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub name: String,

    #[serde(default)]
    pub files: Vec<FileDeclaration>,

    #[serde(default)]
    pub groups: Vec<GroupRef>,
}

/// Reference to a template group with values that override the group's own
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRef {
    pub group_name: String,

    #[serde(default)]
    pub values: Values,
}

/// A single file (or directory) declaration
///
/// Exactly one of `source`, `source_url` and `content` must be set. Empty
/// strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDeclaration {
    #[serde(default)]
    pub destination: String,

    /// Local file or directory, relative to the templates directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Values::is_empty")]
    pub values: Values,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<FileMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overwrite: Option<bool>,
}

impl FileDeclaration {
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref().filter(|p| !p.as_os_str().is_empty())
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source_url.as_deref().filter(|s| !s.is_empty())
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref().filter(|s| !s.is_empty())
    }

    /// Number of content sources set on this declaration
    pub fn source_count(&self) -> usize {
        [
            self.source().is_some(),
            self.source_url().is_some(),
            self.content().is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Turn the declaration into a desired file.
    ///
    /// A local source that is a directory on disk becomes a directory source;
    /// any other local source is a file.
    pub fn to_desired(&self) -> Result<DesiredFile, ConfigError> {
        let source = match (self.content(), self.source_url(), self.source()) {
            (Some(content), None, None) => ContentSource::Content(content.to_string()),
            (None, Some(url), None) => ContentSource::Url(url.to_string()),
            (None, None, Some(path)) if path.is_dir() => ContentSource::Directory(path.clone()),
            (None, None, Some(path)) => ContentSource::File(path.clone()),
            (None, None, None) => {
                return Err(ConfigError::MissingSource {
                    destination: self.destination.clone(),
                })
            }
            _ => {
                return Err(ConfigError::SourceConflict {
                    destination: self.destination.clone(),
                })
            }
        };

        Ok(DesiredFile::new(&self.destination, source)
            .with_values(self.values.clone())
            .with_permissions(self.permissions)
            .with_overwrite(self.overwrite))
    }
}
