//! Project expansion
//!
//! Flattens a project's own files and its template group references into the
//! desired set: one [`DesiredFile`] per destination, directory sources
//! already walked.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::config::{ConfigError, FileDeclaration, ProjectConfig};
use crate::domain::entities::{DesiredFile, Values};
use crate::domain::ports::SourceResolver;
use crate::domain::services::merge_values;
use crate::error::{StructuresmithError, StructuresmithResult};

/// Expands project declarations using a source resolver
pub struct ProjectExpander<'a, SR: SourceResolver + ?Sized> {
    resolver: &'a SR,
}

impl<'a, SR: SourceResolver + ?Sized> ProjectExpander<'a, SR> {
    pub fn new(resolver: &'a SR) -> Self {
        Self { resolver }
    }

    /// Build the desired set for `project`.
    ///
    /// Project files come first, then each group reference in order. A group
    /// file's values are merged with the values given at the reference, the
    /// reference winning.
    pub fn expand(
        &self,
        project: &ProjectConfig,
        groups: &BTreeMap<String, Vec<FileDeclaration>>,
    ) -> StructuresmithResult<Vec<DesiredFile>> {
        let mut desired = Vec::new();

        for decl in &project.files {
            desired.extend(self.expand_declaration(decl, None)?);
        }

        for group_ref in &project.groups {
            let files = groups.get(&group_ref.group_name).ok_or_else(|| {
                ConfigError::UnknownGroup {
                    project: project.name.clone(),
                    group: group_ref.group_name.clone(),
                }
            })?;
            for decl in files {
                desired.extend(self.expand_declaration(decl, Some(&group_ref.values))?);
            }
        }

        check_unique(&project.name, &desired)?;
        debug!(project = %project.name, files = desired.len(), "Expanded project");
        Ok(desired)
    }

    fn expand_declaration(
        &self,
        decl: &FileDeclaration,
        reference_values: Option<&Values>,
    ) -> StructuresmithResult<Vec<DesiredFile>> {
        let mut file = decl.to_desired()?;
        if let Some(overrides) = reference_values {
            let merged = merge_values(file.values(), overrides);
            file = file.with_values(merged);
        }

        let destination = file.destination().to_string();
        self.resolver
            .expand(file)
            .map_err(|source| StructuresmithError::SourceResolution {
                destination,
                source,
            })
    }
}

fn check_unique(project: &str, desired: &[DesiredFile]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(desired.len());
    for file in desired {
        if !seen.insert(file.destination()) {
            return Err(ConfigError::DuplicateDestination {
                project: project.to_string(),
                destination: file.destination().to_string(),
            });
        }
    }
    Ok(())
}
