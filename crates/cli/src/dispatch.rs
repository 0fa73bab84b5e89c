//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Error to exit code mapping (see `error` module).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the process exit code on success: `exec` forwards the child's
/// exit code, every other command returns `ExitCode::Success`.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Show {
            files,
            env_files,
            format,
        } => {
            commands::show::run(&cli.base_files, files, env_files, format)?;
        }
        Commands::Exec { env_files, command } => {
            return commands::exec::run(&cli.base_files, env_files, command);
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell)?;
        }
    }

    Ok(ExitCode::Success.as_i32())
}
