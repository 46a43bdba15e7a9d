//! Declaration file loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::types::DeclarationFile;
use super::ConfigError;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load a declaration file, discarding warnings.
pub fn load(path: &Path, templates_dir: &Path) -> Result<DeclarationFile, ConfigError> {
    load_with_warnings(path, templates_dir).map(|(declarations, _)| declarations)
}

/// Load a declaration file and collect non-fatal warnings (e.g. unknown keys).
///
/// Local `source` paths come back prefixed with `templates_dir`.
pub fn load_with_warnings(
    path: &Path,
    templates_dir: &Path,
) -> Result<(DeclarationFile, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (mut declarations, warnings) = parse_with_warnings(&content, path)?;
    declarations.prefix_sources(templates_dir);

    info!(
        path = %path.display(),
        projects = declarations.projects.len(),
        groups = declarations.template_groups.len(),
        "Configuration read successfully"
    );
    Ok((declarations, warnings))
}

pub(crate) fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> Result<(DeclarationFile, Vec<ConfigWarning>), ConfigError> {
    // An empty document declares nothing
    if content.trim().is_empty() {
        return Ok((DeclarationFile::default(), Vec::new()));
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = serde_yaml_ng::Deserializer::from_str(content);

    let declarations: DeclarationFile = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((declarations, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start().starts_with(needle) || line.contains(&format!(" {needle}:"))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "templateGroups",
        "projects",
        "name",
        "files",
        "groups",
        "groupName",
        "values",
        "destination",
        "source",
        "sourceUrl",
        "content",
        "permissions",
        "overwrite",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(&unknown.to_lowercase(), &candidate.to_lowercase());
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
