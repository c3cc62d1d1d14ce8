//! Line-level parsing of env files.
//!
//! A line is trimmed, then classified as blank, comment (`#` first), or a
//! `KEY=VALUE` pair split on the first `=`. Values wrapped in one pair of
//! double quotes are unwrapped verbatim; bare values are trimmed.

use std::io::BufRead;

use crate::error::{Error, Result};

/// A single `KEY=VALUE` pair read from an env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Why a single line could not be parsed.
///
/// Carries no line number; [`LineError::at`] attaches one when the line came
/// from a stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    /// The line has no `=` separator. Holds the trimmed line.
    Malformed(String),
    /// The value opens a double quote it never closes. Holds the trimmed value.
    UnbalancedQuotes(String),
}

impl LineError {
    /// Converts into a crate [`Error`] for the given 1-based line number.
    pub fn at(self, line: usize) -> Error {
        match self {
            LineError::Malformed(content) => Error::MalformedLine { line, content },
            LineError::UnbalancedQuotes(value) => Error::UnbalancedQuotes { line, value },
        }
    }
}

/// Parses one line of an env file.
///
/// Returns `Ok(None)` for blank lines and comments.
pub fn parse_line(raw: &str) -> Result<Option<Entry>, LineError> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (key, value) = line
        .split_once('=')
        .ok_or_else(|| LineError::Malformed(line.to_string()))?;

    let key = key.trim();
    let value = unquote(value.trim())?;

    Ok(Some(Entry::new(key, value)))
}

/// Strips exactly one pair of surrounding double quotes.
fn unquote(value: &str) -> Result<&str, LineError> {
    let Some(rest) = value.strip_prefix('"') else {
        return Ok(value);
    };

    // A lone `"` both starts and ends the value but encloses nothing.
    rest.strip_suffix('"')
        .ok_or_else(|| LineError::UnbalancedQuotes(value.to_string()))
}

/// Parses every line of `reader` without touching any environment.
///
/// Stops at the first read or parse error.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<Entry>> {
    entries(reader).collect()
}

/// Yields the entries of `reader` in line order, skipping blanks and comments.
///
/// Errors carry the 1-based line number. Callers stop at the first error.
pub(crate) fn entries<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Entry>> {
    reader
        .lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let number = index + 1;
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    return Some(Err(Error::StreamRead {
                        line: number,
                        source,
                    }))
                }
            };

            match parse_line(&line) {
                Ok(Some(entry)) => Some(Ok(entry)),
                Ok(None) => {
                    tracing::trace!(line = number, "skipping blank or comment line");
                    None
                }
                Err(e) => Some(Err(e.at(number))),
            }
        })
}
