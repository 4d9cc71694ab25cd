#![no_main]

use libfuzzer_sys::fuzz_target;
use release_changes_payload::repositories_from_json;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(repositories) = repositories_from_json(text)
    {
        let mut seen = std::collections::HashSet::new();
        for repository in &repositories {
            assert!(!repository.is_empty());
            assert!(seen.insert(repository.as_str()), "duplicate {repository}");
        }
    }
});
