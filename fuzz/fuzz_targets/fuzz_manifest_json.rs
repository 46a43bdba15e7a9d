#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz .anvil.lock parsing - this should never panic
    let _ = structuresmith::infrastructure::parse_manifest(data);
});
