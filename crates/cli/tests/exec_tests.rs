//! Integration tests for the `exec` command.
//!
//! Responsibilities:
//! - Verify the child sees merged variables over the inherited environment.
//! - Verify exit codes: child's own code, 2 for env file errors, 127 for unknown programs.
//!
//! Invariants:
//! - Tests that rely on `sh` are Unix-only.

mod common;

use common::envmerge_cmd;
#[cfg(unix)]
use common::write_env_file;
use predicates::prelude::*;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn test_exec_passes_merged_env_to_child() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_env_file(&temp_dir, "first.env", "GREETING=hello\nTARGET=first");
    let second = write_env_file(&temp_dir, "second.env", "TARGET=world");

    envmerge_cmd()
        .arg("exec")
        .arg("-f")
        .arg(&first)
        .arg("-f")
        .arg(&second)
        .args(["--", "sh", "-c", "printf '%s %s' \"$GREETING\" \"$TARGET\""])
        .assert()
        .success()
        .stdout("hello world");
}

#[cfg(unix)]
#[test]
fn test_exec_merged_values_override_inherited() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = write_env_file(&temp_dir, "app.env", "ENVMERGE_TEST_VALUE=from_file");

    envmerge_cmd()
        .env("ENVMERGE_TEST_VALUE", "from_parent")
        .env("ENVMERGE_TEST_INHERITED", "kept")
        .arg("exec")
        .arg("-f")
        .arg(&env_file)
        .args([
            "--",
            "sh",
            "-c",
            "printf '%s %s' \"$ENVMERGE_TEST_VALUE\" \"$ENVMERGE_TEST_INHERITED\"",
        ])
        .assert()
        .success()
        .stdout("from_file kept");
}

#[cfg(unix)]
#[test]
fn test_exec_forwards_child_exit_code() {
    envmerge_cmd()
        .args(["exec", "--", "sh", "-c", "exit 7"])
        .assert()
        .code(7);
}

#[test]
fn test_exec_missing_env_file_does_not_start_program() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.env");
    let marker = temp_dir.path().join("ran");

    envmerge_cmd()
        .arg("exec")
        .arg("-f")
        .arg(&missing)
        .arg("--")
        .arg("touch")
        .arg(&marker)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("missing.env"));

    assert!(!marker.exists(), "program must not run when loading fails");
}

#[test]
fn test_exec_unknown_program_exits_127() {
    let program = "envmerge-definitely-not-a-real-program";

    envmerge_cmd()
        .args(["exec", "--", program])
        .assert()
        .code(127)
        .stderr(predicate::str::contains(program));
}
