//! Shared test utilities for envmerge integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory.
//! - Write env file fixtures into temp directories.
//!
//! Invariants / Assumptions:
//! - `ENVMERGE_FILES` and `ENVMERGE_FORMAT` are cleared so host settings never leak in.
//! - `RUST_LOG` is cleared so stderr assertions only see error output.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Returns a hermetic `envmerge` command for integration testing.
pub fn envmerge_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("envmerge");

    cmd.env_remove("ENVMERGE_FILES")
        .env_remove("ENVMERGE_FORMAT")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `contents` to `name` inside `dir` and return the full path.
#[allow(dead_code)]
pub fn write_env_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write env fixture");
    path
}
