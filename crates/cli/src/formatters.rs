//! Output formatting for merged env mappings.
//!
//! Responsibilities:
//! - Render an `EnvMap` as dotenv lines or JSON.
//!
//! Invariants:
//! - Output is sorted by key (inherited from `EnvMap`).
//! - Dotenv output parses back to the same mapping. The one exception is a
//!   value holding both a real newline and a literal `\n` sequence.

use anyhow::Result;
use envmerge_config::EnvMap;

use crate::args::OutputFormat;

/// Render `env` in the requested format, with a trailing newline.
pub fn format_env(env: &EnvMap, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Dotenv => Ok(format_dotenv(env)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(env)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn format_dotenv(env: &EnvMap) -> String {
    let mut out = String::new();
    for (key, value) in env {
        out.push_str(key);
        out.push('=');
        out.push_str(&quote_value(value));
        out.push('\n');
    }
    out
}

/// Single quotes keep the value verbatim. A value holding a newline needs
/// double quotes, the only form that turns `\n` back into a newline.
fn quote_value(value: &str) -> String {
    if value.contains('\n') {
        format!("\"{}\"", value.replace('\n', "\\n"))
    } else {
        format!("'{value}'")
    }
}
