//! Property tests for recursive value merging.

use proptest::prelude::*;
use serde_yaml_ng::{Mapping, Value};

use structuresmith::merge_values;

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-d]").unwrap()
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-z]{0,4}".prop_map(Value::String),
        any::<bool>().prop_map(Value::Bool),
        proptest::collection::vec("[a-z]{0,3}".prop_map(Value::String), 0..3)
            .prop_map(Value::Sequence),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        proptest::collection::btree_map(key(), inner, 0..4).prop_map(|entries| {
            Value::Mapping(
                entries
                    .into_iter()
                    .map(|(k, v)| (Value::String(k), v))
                    .collect(),
            )
        })
    })
}

fn mapping() -> impl Strategy<Value = Mapping> {
    proptest::collection::btree_map(key(), value(), 0..4).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(k, v)| (Value::String(k), v))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging with an empty mapping changes nothing, on either side.
    #[test]
    fn property_empty_is_identity(m in mapping()) {
        prop_assert_eq!(merge_values(&m, &Mapping::new()), m.clone());
        prop_assert_eq!(merge_values(&Mapping::new(), &m), m);
    }

    /// PROPERTY: the result has exactly the union of both key sets.
    #[test]
    fn property_keys_are_union(dst in mapping(), src in mapping()) {
        let merged = merge_values(&dst, &src);
        for k in dst.keys().chain(src.keys()) {
            prop_assert!(merged.contains_key(k));
        }
        prop_assert!(merged.keys().all(|k| dst.contains_key(k) || src.contains_key(k)));
    }

    /// PROPERTY: src wins for any key where either side is not a mapping.
    #[test]
    fn property_src_wins_unless_both_are_mappings(dst in mapping(), src in mapping()) {
        let merged = merge_values(&dst, &src);
        for (k, v) in &src {
            let both_maps = v.is_mapping() && dst.get(k).is_some_and(Value::is_mapping);
            if !both_maps {
                prop_assert_eq!(merged.get(k), Some(v));
            }
        }
    }

    /// PROPERTY: merging a mapping into itself is a no-op.
    #[test]
    fn property_self_merge_is_idempotent(m in mapping()) {
        prop_assert_eq!(merge_values(&m, &m), m);
    }
}
