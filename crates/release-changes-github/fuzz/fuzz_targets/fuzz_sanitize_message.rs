#![no_main]

use libfuzzer_sys::fuzz_target;
use release_changes_github::commit::{MAX_LINE_CHARS, TRUNCATION_MARKER, sanitize_message};

fuzz_target!(|data: &[u8]| {
    if let Ok(message) = std::str::from_utf8(data) {
        let sanitized = sanitize_message(message);
        for line in sanitized.lines() {
            assert!(line.chars().count() <= MAX_LINE_CHARS + TRUNCATION_MARKER.len());
            assert!(!line.contains("Signed-off-by"));
            assert!(!line.trim().is_empty());
        }
    }
});
