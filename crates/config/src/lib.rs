//! Env file ingestion for envmerge.
//!
//! This crate reads zero, one, or many `.env` files and merges them into a
//! single mapping, later files overriding earlier ones.

mod loader;
pub mod parser;

pub use loader::{
    EnvFileError, EnvFileLoader, EnvFileSpec, ParseFailure, parse_env_file, parse_env_files,
};
pub use parser::{EnvMap, parse_lines};
