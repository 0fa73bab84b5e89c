//! `completions` command: print a completion script for `envmerge`.
//!
//! The script goes to stdout; installing it is left to the user's shell setup.

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::{Shell, generate};
use std::io::Write;

use crate::args::Cli;

pub fn run(shell: Shell) -> Result<()> {
    let mut cli = Cli::command();
    let mut stdout = std::io::stdout().lock();
    generate(shell, &mut cli, env!("CARGO_BIN_NAME"), &mut stdout);
    stdout.flush().context("Failed to write completions")?;
    Ok(())
}
