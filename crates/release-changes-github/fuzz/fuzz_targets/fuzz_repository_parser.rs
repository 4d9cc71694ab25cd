#![no_main]

use libfuzzer_sys::fuzz_target;
use release_changes_github::parse_repository;

fuzz_target!(|data: &[u8]| {
    if let Ok(reference) = std::str::from_utf8(data)
        && let Some(repository) = parse_repository(reference)
    {
        assert!(!repository.organization.is_empty());
        assert!(!repository.name.is_empty());
        assert_eq!(repository.url(), reference);
    }
});
