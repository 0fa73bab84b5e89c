//! Path specification for env file loading.
//!
//! Responsibilities:
//! - Represent "no files", "one file" and "an ordered list of files" as one type.
//! - Normalize any of those shapes into a single ordered `Vec<PathBuf>`.
//!
//! Invariants:
//! - Caller order is preserved; paths are never reordered or deduplicated.
//! - Paths are not checked for existence here; that happens when they are read.

use std::path::{Path, PathBuf};

/// Which env files to load, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EnvFileSpec {
    /// No files; loads to an empty mapping.
    #[default]
    None,
    /// Exactly one file.
    Single(PathBuf),
    /// Files applied in sequence, later ones overriding earlier ones.
    Many(Vec<PathBuf>),
}

impl EnvFileSpec {
    /// Collapse the specification into an ordered list of paths.
    pub fn into_paths(self) -> Vec<PathBuf> {
        match self {
            EnvFileSpec::None => Vec::new(),
            EnvFileSpec::Single(path) => vec![path],
            EnvFileSpec::Many(paths) => paths,
        }
    }
}

impl From<PathBuf> for EnvFileSpec {
    fn from(path: PathBuf) -> Self {
        EnvFileSpec::Single(path)
    }
}

impl From<&PathBuf> for EnvFileSpec {
    fn from(path: &PathBuf) -> Self {
        EnvFileSpec::Single(path.clone())
    }
}

impl From<&Path> for EnvFileSpec {
    fn from(path: &Path) -> Self {
        EnvFileSpec::Single(path.to_path_buf())
    }
}

impl From<&str> for EnvFileSpec {
    fn from(path: &str) -> Self {
        EnvFileSpec::Single(PathBuf::from(path))
    }
}

impl From<String> for EnvFileSpec {
    fn from(path: String) -> Self {
        EnvFileSpec::Single(PathBuf::from(path))
    }
}

impl<P: Into<PathBuf>> From<Vec<P>> for EnvFileSpec {
    fn from(paths: Vec<P>) -> Self {
        EnvFileSpec::Many(paths.into_iter().map(Into::into).collect())
    }
}

impl<P: AsRef<Path>> From<&[P]> for EnvFileSpec {
    fn from(paths: &[P]) -> Self {
        EnvFileSpec::Many(paths.iter().map(|p| p.as_ref().to_path_buf()).collect())
    }
}

impl<P: Into<PathBuf>, const N: usize> From<[P; N]> for EnvFileSpec {
    fn from(paths: [P; N]) -> Self {
        EnvFileSpec::Many(paths.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<EnvFileSpec>> From<Option<T>> for EnvFileSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map_or(EnvFileSpec::None, Into::into)
    }
}
