//! `show` command: print the merged mapping.
//!
//! Responsibilities:
//! - Merge the requested env files.
//! - Write the result to stdout in the requested format.
//!
//! Invariants:
//! - Nothing is written to stdout if any file fails to load.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

use super::loader_for;
use crate::args::OutputFormat;
use crate::formatters::format_env;

pub fn run(
    base_files: &[PathBuf],
    files: Vec<PathBuf>,
    env_files: Vec<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let loader = loader_for(base_files, files.into_iter().chain(env_files));
    debug!(files = loader.files().len(), ?format, "Merging env files");

    let env = loader.load().context("Failed to merge env files")?;
    let output = format_env(&env, format)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to write output")?;
    Ok(())
}
