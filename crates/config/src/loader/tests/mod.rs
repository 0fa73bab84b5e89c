//! Tests for env file loading and merging.
//!
//! Responsibilities:
//! - Test merge order and last-file-wins semantics across files.
//! - Test file-level failures (missing, directory, binary content).
//! - Test the `EnvFileLoader` builder.
//!
//! Does NOT handle:
//! - Line-level parsing rules (tested in parser.rs).
//!
//! Invariants:
//! - Every test writes its fixtures into its own `tempfile::TempDir`.
//! - No test touches the process environment or the current directory.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;


/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_env_file(dir: &TempDir, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("Failed to write env fixture");
    path
}
