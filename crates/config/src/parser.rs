//! Line parser for `.env` file contents.
//!
//! Responsibilities:
//! - Decide whether raw file bytes are text.
//! - Turn one file's text into a flat `EnvMap` of `KEY=VALUE` entries.
//!
//! Does NOT handle:
//! - File I/O or combining several files (see `loader`).
//! - Variable interpolation (`${VAR}`) or shell escaping beyond `\n` in double quotes.
//!
//! Invariants:
//! - Parsing is single-pass and stateless; the same text always yields the same map.
//! - Malformed lines are skipped, never reported as errors.
//! - Within one text, a later definition of a key overrides an earlier one.
//! - Line contents are never logged; only line numbers are.

use std::borrow::Cow;
use std::collections::BTreeMap;

use tracing::trace;

use crate::loader::ParseFailure;

/// A mapping from variable name to value.
///
/// Sorted so that printing and comparing merged results is deterministic.
pub type EnvMap = BTreeMap<String, String>;

const BYTE_ORDER_MARK: char = '\u{feff}';
const EXPORT_KEYWORD: &str = "export";

/// Check that raw file contents are text and borrow them as `&str`.
///
/// Invalid UTF-8 and embedded NUL bytes both mean the file is binary.
pub fn decode_text(bytes: &[u8]) -> Result<&str, ParseFailure> {
    let text = std::str::from_utf8(bytes).map_err(|e| ParseFailure::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })?;

    if let Some(offset) = bytes.iter().position(|&byte| byte == 0) {
        return Err(ParseFailure::NulByte { offset });
    }

    Ok(text)
}

/// Parse `.env` text into a mapping.
pub fn parse_lines(raw_text: &str) -> EnvMap {
    let text = raw_text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw_text);
    let mut env = EnvMap::new();

    for (index, line) in split_lines(text).enumerate() {
        match parse_line(line) {
            Line::Blank | Line::Comment => {}
            Line::Entry { key, value } => {
                env.insert(key.to_string(), value.into_owned());
            }
            Line::Malformed => {
                trace!(lineno = index + 1, "skipping malformed line");
            }
        }
    }

    env
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Entry { key: &'a str, value: Cow<'a, str> },
    Malformed,
}

fn parse_line(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if trimmed.starts_with('#') {
        return Line::Comment;
    }

    let Some((key, value)) = trimmed.split_once('=') else {
        return Line::Malformed;
    };

    let key = strip_export(key.trim_end());
    if !is_valid_key(key) {
        return Line::Malformed;
    }

    Line::Entry {
        key,
        value: unquote(value.trim()),
    }
}

/// `export FOO` -> `FOO`. A key literally named `export` is left alone.
fn strip_export(key: &str) -> &str {
    match key.strip_prefix(EXPORT_KEYWORD) {
        Some(rest) if rest.starts_with(|ch: char| ch.is_ascii_whitespace()) => rest.trim_start(),
        _ => key,
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '.' | '-'))
}

/// Strip one enclosing quote on each side. Only double-quoted values expand `\n`.
fn unquote(value: &str) -> Cow<'_, str> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        let inner = &value[1..value.len() - 1];
        return if inner.contains("\\n") {
            Cow::Owned(inner.replace("\\n", "\n"))
        } else {
            Cow::Borrowed(inner)
        };
    }

    let value = value.strip_prefix(['"', '\'']).unwrap_or(value);
    let value = value.strip_suffix(['"', '\'']).unwrap_or(value);
    Cow::Borrowed(value)
}

/// Split on `\n`, `\r\n` or a lone `\r`.
fn split_lines(text: &str) -> LineSplitter<'_> {
    LineSplitter { rest: text }
}

#[derive(Debug, Clone)]
struct LineSplitter<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LineSplitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(index) => {
                let (line, tail) = self.rest.split_at(index);
                self.rest = tail.strip_prefix("\r\n").unwrap_or_else(|| &tail[1..]);
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}
