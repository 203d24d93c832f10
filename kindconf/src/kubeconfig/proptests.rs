//! Property-based tests for candidate list construction.

use super::paths::discard_empty_and_duplicates;
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;

// Small alphabet so duplicates are common
fn entry_strategy() -> impl Strategy<Value = PathBuf> {
    "[ab/]{0,3}".prop_map(PathBuf::from)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        .. ProptestConfig::default()
    })]

    // No empty entries survive
    #[test]
    fn no_empty_entries(entries in prop::collection::vec(entry_strategy(), 0..12)) {
        let kept = discard_empty_and_duplicates(entries);
        prop_assert!(kept.iter().all(|p| !p.as_os_str().is_empty()));
    }

    // No entry appears twice
    #[test]
    fn no_duplicates(entries in prop::collection::vec(entry_strategy(), 0..12)) {
        let kept = discard_empty_and_duplicates(entries);
        let unique: HashSet<_> = kept.iter().map(|p| p.as_os_str().to_os_string()).collect();
        prop_assert_eq!(unique.len(), kept.len());
    }

    // Output is the input's first occurrences, in input order
    #[test]
    fn keeps_first_occurrence_order(entries in prop::collection::vec(entry_strategy(), 0..12)) {
        let mut expected: Vec<PathBuf> = Vec::new();
        for entry in &entries {
            if !entry.as_os_str().is_empty()
                && !expected.iter().any(|e| e.as_os_str() == entry.as_os_str())
            {
                expected.push(entry.clone());
            }
        }
        prop_assert_eq!(discard_empty_and_duplicates(entries), expected);
    }

    // Applying the filter twice changes nothing
    #[test]
    fn idempotent(entries in prop::collection::vec(entry_strategy(), 0..12)) {
        let once = discard_empty_and_duplicates(entries);
        let twice = discard_empty_and_duplicates(once.clone());
        prop_assert_eq!(once, twice);
    }
}
