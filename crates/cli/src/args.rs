//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Collect env file paths from flags, positionals and `ENVMERGE_FILES`.
//!
//! Non-responsibilities:
//! - Does not load or merge files (see `commands`).

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envmerge")]
#[command(about = "Merge .env files and print or apply the result", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envmerge show .env .env.local\n  envmerge show -f base.env --format json\n  envmerge exec -f .env -f .env.local -- ./server --port 8080\n  ENVMERGE_FILES=defaults.env envmerge show override.env\n"
)]
pub struct Cli {
    /// Env files applied before any command-specific files (comma-separated).
    #[arg(
        long = "base-files",
        global = true,
        env = "ENVMERGE_FILES",
        value_delimiter = ',',
        value_name = "FILE"
    )]
    pub base_files: Vec<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the merged mapping
    Show {
        /// Env files to merge, in order
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Additional env files, applied after the positional files
        #[arg(short = 'f', long = "env-file", value_name = "FILE")]
        env_files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, env = "ENVMERGE_FORMAT", default_value_t = OutputFormat::Dotenv)]
        format: OutputFormat,
    },

    /// Run a program with the merged mapping added to its environment
    Exec {
        /// Env files to merge, in order
        #[arg(short = 'f', long = "env-file", value_name = "FILE")]
        env_files: Vec<PathBuf>,

        /// Program to run, followed by its arguments
        #[arg(
            required = true,
            trailing_var_arg = true,
            allow_hyphen_values = true,
            value_name = "COMMAND"
        )]
        command: Vec<OsString>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY="value"` lines sorted by key
    Dotenv,
    /// A JSON object
    Json,
}
