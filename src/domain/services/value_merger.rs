//! Recursive merge of template values
//!
//! Used when a template group file is referenced from a project: the values
//! given at the reference override the file's own values, key by key.

use serde_yaml_ng::Value;

use crate::domain::entities::Values;

/// Merge `src` into a copy of `dst`.
///
/// Nested mappings present on both sides are merged recursively. Anything
/// else in `src` (scalars, sequences, or a mapping replacing a scalar)
/// replaces the `dst` value wholesale. Neither input is modified.
pub fn merge_values(dst: &Values, src: &Values) -> Values {
    let mut merged = dst.clone();
    for (key, src_value) in src {
        let value = match (merged.get(key), src_value) {
            (Some(Value::Mapping(dst_map)), Value::Mapping(src_map)) => {
                Value::Mapping(merge_values(dst_map, src_map))
            }
            _ => src_value.clone(),
        };
        merged.insert(key.clone(), value);
    }
    merged
}
