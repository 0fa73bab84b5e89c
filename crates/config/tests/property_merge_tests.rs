//! Property-based tests for env file parsing and merging.
//!
//! These tests verify the override invariants using randomly generated
//! entries, catching ordering edge cases that unit tests might miss.
//!
//! Test coverage:
//! - parse_lines: last definition of a key wins within one text
//! - parse_env_files: last file defining a key wins across files
//! - parse_env_files: keys absent from all files never appear

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::fs;

use envmerge_config::{EnvMap, parse_env_files, parse_lines};
use tempfile::TempDir;

/// Strategy for generating keys the parser accepts.
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("SHARED".to_string()),
        Just("PATH_EXTRA".to_string()),
        "[A-Z][A-Z0-9_]{0,8}".prop_map(String::from),
    ]
}

/// Strategy for generating unquoted values without surrounding whitespace.
fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z0-9_/:.,@-]{1,24}".prop_map(String::from),
    ]
}

/// Strategy for one file's worth of entries, in definition order.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec((key_strategy(), value_strategy()), 0..12)
}

fn render(entries: &[(String, String)]) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}

/// Fold entries the way the merger is expected to: later wins.
fn expected(files: &[Vec<(String, String)>]) -> EnvMap {
    let mut env = BTreeMap::new();
    for entries in files {
        for (key, value) in entries {
            env.insert(key.clone(), value.clone());
        }
    }
    env
}

proptest! {
    #[test]
    fn prop_last_definition_wins_within_text(entries in entries_strategy()) {
        let parsed = parse_lines(&render(&entries));
        prop_assert_eq!(parsed, expected(std::slice::from_ref(&entries)));
    }

    #[test]
    fn prop_last_file_wins_across_files(files in prop::collection::vec(entries_strategy(), 0..5)) {
        let temp_dir = TempDir::new().unwrap();
        let paths: Vec<_> = files
            .iter()
            .enumerate()
            .map(|(i, entries)| {
                let path = temp_dir.path().join(format!("{i}.env"));
                fs::write(&path, render(entries)).unwrap();
                path
            })
            .collect();

        let merged = parse_env_files(paths).unwrap();

        prop_assert_eq!(merged, expected(&files));
    }

    #[test]
    fn prop_quotes_and_padding_are_stripped(key in key_strategy(), value in "[a-z0-9]{1,16}") {
        let text = format!("  {key} =  \"{value}\"  \n");
        let parsed = parse_lines(&text);
        prop_assert_eq!(parsed.get(&key), Some(&value));
    }
}
