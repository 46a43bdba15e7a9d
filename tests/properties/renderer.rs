//! Property tests for template rendering.

use proptest::prelude::*;

use structuresmith::domain::entities::Values;
use structuresmith::domain::services::{render_or_copy, render_template};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering never panics, whatever the bytes.
    #[test]
    fn property_render_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let _ = render_template(&bytes, &Values::new());
        let _ = render_or_copy(&bytes, &Values::new());
    }

    /// PROPERTY: text without action delimiters renders unchanged.
    #[test]
    fn property_plain_text_is_unchanged(text in "[^{}]{0,200}") {
        let rendered = render_template(text.as_bytes(), &Values::new()).unwrap();
        prop_assert_eq!(rendered, text.as_bytes().to_vec());
    }

    /// PROPERTY: a failed render falls back to the exact input bytes.
    #[test]
    fn property_fallback_is_verbatim(prefix in "[a-z ]{0,20}", key in "[a-z]{1,8}") {
        let text = format!("{prefix}{{{{ .{key}");
        prop_assert!(render_template(text.as_bytes(), &Values::new()).is_err());
        prop_assert_eq!(render_or_copy(text.as_bytes(), &Values::new()), text.into_bytes());
    }

    /// PROPERTY: a simple field is substituted with its string value.
    #[test]
    fn property_field_substitution(key in "[a-z]{1,8}", value in "[A-Za-z0-9 ]{0,16}") {
        let mut values = Values::new();
        values.insert(key.clone().into(), value.clone().into());

        let rendered = render_template(format!("<{{{{ .{key} }}}}>").as_bytes(), &values).unwrap();

        prop_assert_eq!(String::from_utf8(rendered).unwrap(), format!("<{value}>"));
    }
}
