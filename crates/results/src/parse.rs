// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result log parsing.
//!
//! A result log holds one `<name>.<status>` line per test. Blank lines are
//! ignored; any other line must split into exactly two parts.

use crate::record::{ResultRecord, ResultSet};
use crate::status::StatusTokens;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Separator between the test name and its status token.
pub const SEPARATOR: char = '.';

/// Whether a test name reads back unchanged from a result log line.
///
/// The name must be non-empty, free of surrounding whitespace, and contain
/// neither the separator nor a line break.
pub fn is_loggable_name(name: &str) -> bool {
    !name.is_empty()
        && name == name.trim()
        && !name.contains(SEPARATOR)
        && !name.contains(['\n', '\r'])
}

/// A result log line that is not `<name>.<status>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid line format at line {line_number}: {line}")]
pub struct FormatError {
    /// 1-based line number within the log.
    pub line_number: usize,
    pub line: String,
}

/// Errors from reading a result log file.
#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("Failed to read result log '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}

/// Parse result log text into a result set.
pub fn parse(text: &str, tokens: &StatusTokens) -> Result<ResultSet, FormatError> {
    let mut set = ResultSet::new();

    for (lineno, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let mut parts = line.split(SEPARATOR);
        let (name, status) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(status), None) => (name.trim(), status.trim()),
            _ => {
                return Err(FormatError {
                    line_number: lineno + 1,
                    line: line.to_string(),
                })
            }
        };

        set.insert(ResultRecord::new(name, tokens.status_of(status)));
    }

    Ok(set)
}

/// Read and parse a result log file.
pub fn load(path: &Path, tokens: &StatusTokens) -> Result<ResultSet, ResultsError> {
    let text = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text, tokens).map_err(|source| ResultsError::Format {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "parse_tests.rs"]
mod tests;
