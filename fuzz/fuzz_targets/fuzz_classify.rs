#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(rel) = std::str::from_utf8(data) {
        // Fuzz bucket classification - this should never panic
        let _ = scenemap::Bucket::classify(rel);
    }
});
