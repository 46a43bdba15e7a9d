//! Template rendering
//!
//! Supports the subset of Go template syntax that declaration files use:
//! field actions (`{{ .name }}`, `{{ .svc.port }}`, `{{ . }}`), comments
//! (`{{/* ... */}}`) and the `{{-` / `-}}` whitespace trim markers.
//!
//! Rendering is a two-step strategy: [`render_template`] either succeeds or
//! reports a [`TemplateError`], and [`render_or_copy`] falls back to the raw
//! bytes in the latter case. Template problems never fail a run.

use std::fmt::Write as _;

use serde_yaml_ng::Value;
use tracing::debug;

use crate::domain::entities::Values;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Printed for a missing key or a null value
pub const NO_VALUE: &str = "<no value>";

/// Why a template could not be rendered
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("content is not valid UTF-8")]
    NotUtf8,
    #[error("unclosed action starting at byte {0}")]
    Unclosed(usize),
    #[error("unclosed comment starting at byte {0}")]
    UnclosedComment(usize),
    #[error("unsupported action {0:?}")]
    Unsupported(String),
    #[error("missing value for '{0}'")]
    MissingIntermediate(String),
    #[error("can't evaluate field '{field}' in {kind} value")]
    NotAMapping { field: String, kind: &'static str },
}

#[derive(Debug, PartialEq)]
enum Node<'a> {
    Text(&'a str),
    Field(Vec<&'a str>),
}

/// Render `content` with `values`.
pub fn render_template(content: &[u8], values: &Values) -> Result<Vec<u8>, TemplateError> {
    let source = std::str::from_utf8(content).map_err(|_| TemplateError::NotUtf8)?;
    let nodes = parse(source)?;

    let root = Value::Mapping(values.clone());
    let mut out = String::with_capacity(source.len());
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Field(path) => write_value(&mut out, lookup(&root, &path)?),
        }
    }
    Ok(out.into_bytes())
}

/// Copy content verbatim
pub fn copy_raw(content: &[u8]) -> Vec<u8> {
    content.to_vec()
}

/// Render `content`, falling back to the raw bytes if it is not a valid template
pub fn render_or_copy(content: &[u8], values: &Values) -> Vec<u8> {
    match render_template(content, values) {
        Ok(rendered) => rendered,
        Err(err) => {
            debug!(error = %err, "Template rendering failed, copying content as-is");
            copy_raw(content)
        }
    }
}

fn parse(source: &str) -> Result<Vec<Node<'_>>, TemplateError> {
    let mut nodes = Vec::new();
    let mut rest = source;
    let mut offset = 0;
    let mut trim_next = false;

    while let Some(start) = rest.find(OPEN) {
        let mut text = &rest[..start];
        if trim_next {
            text = text.trim_start();
        }

        let after_open = &rest[start + OPEN.len()..];
        let trim_left = after_open.starts_with('-')
            && after_open[1..].starts_with(|c: char| c.is_ascii_whitespace());
        if trim_left {
            text = text.trim_end();
        }
        if !text.is_empty() {
            nodes.push(Node::Text(text));
        }

        let body_start = if trim_left { 1 } else { 0 };
        let body_region = &after_open[body_start..];
        let action_at = offset + start;

        let (body, consumed) = if body_region.trim_start().starts_with("/*") {
            comment_body(body_region).ok_or(TemplateError::UnclosedComment(action_at))?
        } else {
            let end = body_region
                .find(CLOSE)
                .ok_or(TemplateError::Unclosed(action_at))?;
            (&body_region[..end], end + CLOSE.len())
        };

        let (body, trim_right) = match body.strip_suffix('-') {
            Some(stripped) if stripped.ends_with(|c: char| c.is_ascii_whitespace()) => {
                (stripped, true)
            }
            _ => (body, false),
        };
        trim_next = trim_right;

        let action = body.trim();
        if !action.starts_with("/*") {
            nodes.push(Node::Field(parse_field(action)?));
        }

        let advance = start + OPEN.len() + body_start + consumed;
        rest = &rest[advance..];
        offset += advance;
    }

    let tail = if trim_next { rest.trim_start() } else { rest };
    if !tail.is_empty() {
        nodes.push(Node::Text(tail));
    }
    Ok(nodes)
}

/// Split a comment action into its body and the bytes consumed up to and
/// including the closing braces.
fn comment_body(region: &str) -> Option<(&str, usize)> {
    let close = region.find("*/")? + 2;
    let after = &region[close..];
    let trailing = after.len() - after.trim_start().len();
    let after = after.trim_start();
    let (after, dash) = match after.strip_prefix('-') {
        Some(stripped) => (stripped, 1),
        None => (after, 0),
    };
    if !after.starts_with(CLOSE) {
        return None;
    }
    let end = close + trailing + dash;
    Some((&region[..end], end + CLOSE.len()))
}

fn parse_field(action: &str) -> Result<Vec<&str>, TemplateError> {
    if action == "." {
        return Ok(Vec::new());
    }
    let path = action
        .strip_prefix('.')
        .ok_or_else(|| TemplateError::Unsupported(action.to_string()))?;

    let segments: Vec<&str> = path.split('.').collect();
    let valid = segments.iter().all(|segment| {
        !segment.is_empty()
            && segment
                .chars()
                .all(|c| c.is_alphanumeric() || c == '_')
    });
    if !valid {
        return Err(TemplateError::Unsupported(action.to_string()));
    }
    Ok(segments)
}

fn lookup<'v>(root: &'v Value, path: &[&str]) -> Result<Option<&'v Value>, TemplateError> {
    let mut current = root;
    for (i, segment) in path.iter().enumerate() {
        let mapping = match current {
            Value::Mapping(mapping) => mapping,
            Value::Null => return Err(TemplateError::MissingIntermediate(path[..i].join("."))),
            other => {
                return Err(TemplateError::NotAMapping {
                    field: (*segment).to_string(),
                    kind: kind_of(other),
                })
            }
        };
        match mapping.get(*segment) {
            Some(value) => current = value,
            None if i + 1 == path.len() => return Ok(None),
            None => return Err(TemplateError::MissingIntermediate(path[..=i].join("."))),
        }
    }
    Ok(Some(current))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

fn write_value(out: &mut String, value: Option<&Value>) {
    match value {
        None | Some(Value::Null) => out.push_str(NO_VALUE),
        Some(value) => format_value(out, value),
    }
}

/// Format a value the way Go's `%v` prints decoded YAML
fn format_value(out: &mut String, value: &Value) {
    match value {
        Value::Null => out.push_str("<nil>"),
        Value::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Value::Number(n) => {
            let _ = write!(out, "{n}");
        }
        Value::String(s) => out.push_str(s),
        Value::Sequence(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                format_value(out, item);
            }
            out.push(']');
        }
        Value::Mapping(mapping) => {
            let mut pairs: Vec<(String, &Value)> = mapping
                .iter()
                .map(|(k, v)| {
                    let mut key = String::new();
                    format_value(&mut key, k);
                    (key, v)
                })
                .collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));

            out.push_str("map[");
            for (i, (key, v)) in pairs.into_iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                out.push_str(&key);
                out.push(':');
                format_value(out, v);
            }
            out.push(']');
        }
        Value::Tagged(tagged) => format_value(out, &tagged.value),
    }
}
