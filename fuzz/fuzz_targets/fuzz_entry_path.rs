#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(path) = exercise_pack::EntryPath::parse(raw) {
            assert!(!path.as_str().starts_with('/'));
            assert!(path.as_str().split('/').all(|seg| seg != ".."));
        }
    }
});
