//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::PathBuf;

use kac_notes::{KacSection, Payload};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a release-notes fixture.
pub fn release_notes_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("release_notes").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// All entries of a payload paired with the section they landed in.
pub fn placed_entries(payload: &Payload) -> Vec<(KacSection, String)> {
    payload
        .keep_a_changelog
        .iter()
        .flat_map(|(section, entries)| entries.iter().map(move |e| (section, e.clone())))
        .collect()
}
