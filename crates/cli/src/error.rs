//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map env file and exec failures to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 always means an env file could not be loaded.
//! - Exit codes 126 and 127 follow the shell convention for exec failures.

use envmerge_config::EnvFileError;
use thiserror::Error;

/// Structured exit codes for envmerge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// An env file was missing, unreadable, or not text.
    EnvFileError = 2,

    /// The program given to `exec` exists but could not be started.
    CommandNotExecutable = 126,

    /// The program given to `exec` was not found.
    CommandNotFound = 127,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures starting the child process of `exec`.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("Failed to run {program}: {cause}")]
    Spawn {
        program: String,
        cause: std::io::Error,
    },
}

impl From<&ExecError> for ExitCode {
    fn from(err: &ExecError) -> Self {
        match err {
            ExecError::Spawn { cause, .. } if cause.kind() == std::io::ErrorKind::NotFound => {
                ExitCode::CommandNotFound
            }
            ExecError::Spawn { .. } => ExitCode::CommandNotExecutable,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.downcast_ref::<EnvFileError>().is_some() {
                return ExitCode::EnvFileError;
            }
            if let Some(exec_err) = cause.downcast_ref::<ExecError>() {
                return ExitCode::from(exec_err);
            }
        }

        ExitCode::GeneralError
    }
}
