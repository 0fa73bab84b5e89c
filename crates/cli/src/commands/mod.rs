//! Command handlers for envmerge.

pub mod completions;
pub mod exec;
pub mod show;

use std::path::PathBuf;

use envmerge_config::EnvFileLoader;

/// Build a loader from the global base files followed by command files.
///
/// Base files come from `--base-files` / `ENVMERGE_FILES` and are applied
/// first, so anything named on the command itself overrides them.
pub(crate) fn loader_for<I>(base_files: &[PathBuf], command_files: I) -> EnvFileLoader
where
    I: IntoIterator<Item = PathBuf>,
{
    EnvFileLoader::new()
        .with_files(base_files.iter().cloned())
        .with_files(command_files)
}
