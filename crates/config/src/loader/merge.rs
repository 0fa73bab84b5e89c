//! Merging of several env files into one mapping.
//!
//! Responsibilities:
//! - Read each file of a path specification in order and parse it.
//! - Fold the parsed mappings together, later files overriding earlier ones.
//!
//! Does NOT handle:
//! - Line-level parsing rules (see `crate::parser`).
//! - Applying the result to a process environment (callers do that).
//!
//! Invariants:
//! - The first unreadable or non-text file aborts the merge; nothing is returned
//!   and later files are not read.
//! - A key's merged value is the value from the last file that defines it.
//! - Files are only read, never written or cached.

use std::path::Path;

use tracing::debug;

use super::error::EnvFileError;
use super::spec::EnvFileSpec;
use crate::parser::{EnvMap, decode_text, parse_lines};

/// Load and merge env files, later files overriding earlier ones.
///
/// # Errors
///
/// Returns the first failure encountered:
/// - `EnvFileError::Read` if a file is missing or cannot be read.
/// - `EnvFileError::Parse` if a file's contents are not text.
pub fn parse_env_files(spec: impl Into<EnvFileSpec>) -> Result<EnvMap, EnvFileError> {
    let paths = spec.into().into_paths();
    let mut merged = EnvMap::new();

    for path in &paths {
        let parsed = parse_env_file(path)?;
        merged.extend(parsed);
    }

    debug!(
        files = paths.len(),
        entries = merged.len(),
        "merged env files"
    );
    Ok(merged)
}

/// Load a single env file.
///
/// # Errors
///
/// Same as [`parse_env_files`] for the one path given.
pub fn parse_env_file(path: impl AsRef<Path>) -> Result<EnvMap, EnvFileError> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|cause| EnvFileError::Read {
        path: path.to_path_buf(),
        cause,
    })?;

    let text = decode_text(&bytes).map_err(|reason| EnvFileError::Parse {
        path: path.to_path_buf(),
        reason,
    })?;

    let env = parse_lines(text);
    debug!(path = %path.display(), entries = env.len(), "parsed env file");
    Ok(env)
}
