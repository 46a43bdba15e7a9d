#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating a declaration file should never panic
        let parsed = serde_yaml_ng::from_str::<structuresmith::DeclarationFile>(content);
        if let Ok(declarations) = parsed {
            let _ = structuresmith::config::validate(&declarations);
            for project in &declarations.projects {
                for file in &project.files {
                    let _ = file.to_desired();
                }
            }
        }
    }
});
