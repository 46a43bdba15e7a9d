#![no_main]

use libfuzzer_sys::fuzz_target;
use structuresmith::domain::entities::Values;
use structuresmith::domain::services::{render_or_copy, render_template};

fuzz_target!(|data: &[u8]| {
    let mut values = Values::new();
    values.insert("name".into(), "fuzz".into());
    values.insert(
        "nested".into(),
        serde_yaml_ng::from_str("{a: {b: 1}, list: [x, y]}").unwrap_or_default(),
    );

    let _ = render_template(data, &values);
    let _ = render_or_copy(data, &values);
});
