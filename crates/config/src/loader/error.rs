//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define the file-level failures of a merge: unreadable file, non-text content.
//! - Carry the offending path on every variant.
//!
//! Does NOT handle:
//! - Malformed individual lines (skipped by the parser, never an error).
//! - CLI exit code mapping (see `envmerge-cli`).
//!
//! Invariants:
//! - Every variant identifies the file that failed and states the cause inline,
//!   so the message reads completely without walking a source chain.
//! - Error messages NEVER include raw file contents to prevent secret leakage.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why file contents could not be treated as text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFailure {
    /// The bytes are not valid UTF-8.
    #[error("invalid UTF-8 after byte {valid_up_to}")]
    InvalidUtf8 { valid_up_to: usize },

    /// The file contains a NUL byte, which text env files never do.
    #[error("unexpected NUL byte at offset {offset}")]
    NulByte { offset: usize },
}

/// Errors that can occur while loading env files.
#[derive(Error, Debug)]
pub enum EnvFileError {
    /// The file could not be opened or read.
    #[error("Cannot load environment variables from file {}: {cause}", .path.display())]
    Read {
        path: PathBuf,
        cause: std::io::Error,
    },

    /// The file was read but is not text.
    ///
    /// SAFETY: only the byte offset of the failure is reported, not the content.
    #[error("Cannot load environment variables from file {}: {reason}", .path.display())]
    Parse {
        path: PathBuf,
        reason: ParseFailure,
    },
}

impl EnvFileError {
    /// The file that caused the failure.
    pub fn path(&self) -> &Path {
        match self {
            EnvFileError::Read { path, .. } | EnvFileError::Parse { path, .. } => path,
        }
    }

    /// The I/O error kind, if this is a read failure.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            EnvFileError::Read { cause, .. } => Some(cause.kind()),
            EnvFileError::Parse { .. } => None,
        }
    }
}
