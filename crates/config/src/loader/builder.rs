//! Env file loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvFileLoader` that collects env file paths
//!   from several sources in a single ordered list.
//! - Delegate the actual merge to `parse_env_files`.
//!
//! Does NOT handle:
//! - Reading or parsing files (delegated to merge.rs).
//!
//! Invariants / Assumptions:
//! - Paths are applied in the order they were added.
//! - `load()` does not consume the loader; repeated loads re-read the files.

use std::path::PathBuf;

use super::error::EnvFileError;
use super::merge::parse_env_files;
use super::spec::EnvFileSpec;
use crate::parser::EnvMap;

/// Collects env file paths and merges them on `load()`.
#[derive(Debug, Clone, Default)]
pub struct EnvFileLoader {
    files: Vec<PathBuf>,
}

impl EnvFileLoader {
    /// Create a loader with no files.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    /// Append several files, keeping their order.
    pub fn with_files<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.files.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Append every file named by a path specification.
    pub fn with_spec(mut self, spec: impl Into<EnvFileSpec>) -> Self {
        self.files.extend(spec.into().into_paths());
        self
    }

    /// The files that will be loaded, in order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Merge all collected files.
    ///
    /// # Errors
    ///
    /// See [`parse_env_files`].
    pub fn load(&self) -> Result<EnvMap, EnvFileError> {
        parse_env_files(self.files.as_slice())
    }
}
