//! `exec` command: run a program with the merged mapping in its environment.
//!
//! Responsibilities:
//! - Merge the requested env files.
//! - Spawn the program with the merged variables layered over the inherited
//!   environment and wait for it.
//!
//! Does NOT handle:
//! - Forwarding signals to the child beyond what the OS does for the process group.
//!
//! Invariants:
//! - The program is never started if any env file fails to load.
//! - Merged variables override inherited variables of the same name.

use anyhow::{Context, Result};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::debug;

use super::loader_for;
use crate::error::{ExecError, ExitCode};

/// Run the command and return the exit code to propagate.
pub fn run(base_files: &[PathBuf], env_files: Vec<PathBuf>, command: Vec<OsString>) -> Result<i32> {
    let Some((program, args)) = command.split_first() else {
        anyhow::bail!("No program given to exec");
    };

    let loader = loader_for(base_files, env_files);
    let env = loader.load().context("Failed to merge env files")?;
    debug!(
        program = %program.to_string_lossy(),
        vars = env.len(),
        "Spawning program with merged environment"
    );

    let status = Command::new(program)
        .args(args)
        .envs(&env)
        .status()
        .map_err(|cause| ExecError::Spawn {
            program: program.to_string_lossy().into_owned(),
            cause,
        })?;

    Ok(exit_code_of(status))
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        // Shell convention: 128 + signal number.
        (None, Some(signal)) => 128 + signal,
        (None, None) => ExitCode::GeneralError.as_i32(),
    }
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(ExitCode::GeneralError.as_i32())
}
