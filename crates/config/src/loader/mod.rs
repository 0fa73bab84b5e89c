//! Env file loading and merging.
//!
//! Responsibilities:
//! - Normalize a path specification (none, one, or many files) to an ordered list.
//! - Read, parse and merge env files with last-file-wins semantics.
//! - Provide a builder-pattern `EnvFileLoader` for assembling paths from several sources.
//!
//! Does NOT handle:
//! - Line-level parsing (see `parser.rs`).
//! - Touching the live process environment.
//!
//! Invariants / Assumptions:
//! - A single bad file fails the whole load with an error naming that file.
//! - Malformed lines inside a readable file are skipped silently.

mod builder;
mod error;
mod merge;
mod spec;

pub use builder::EnvFileLoader;
pub use error::{EnvFileError, ParseFailure};
pub use merge::{parse_env_file, parse_env_files};
pub use spec::EnvFileSpec;

#[cfg(test)]
mod tests;
