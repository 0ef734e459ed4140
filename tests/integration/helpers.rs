//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Directory holding the test fixtures.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Read a fixture into a string.
pub fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_dir().join(name))
        .expect("fixture should exist")
}

/// Copy a fixture into a fresh temp dir and return both.
///
/// Keep the `TempDir` alive for as long as the path is used.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("temp dir");
    let path = temp_dir.path().join(name);
    fs::copy(fixtures_dir().join(name), &path)
        .expect("copy fixture");
    (temp_dir, path)
}
