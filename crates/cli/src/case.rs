// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test case loading and selection.
//!
//! Accepted sources:
//! ```json
//! [{ "name": "echo", "command": "echo hi", "expected": "hi" }]
//! ```
//! ```toml
//! [[tests]]
//! index = 1
//! name = "echo"
//! command = "echo hi"
//! expected = "hi"
//! ```
//! JSON is chosen by the `.json` extension; anything else is read as TOML.
//! A JSON object with a `tests` array is accepted too.

use serde::Deserialize;
use shell_tester_results::is_loggable_name;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One scripted test against the subject.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position in the suite
    pub index: usize,
    pub name: String,
    /// Line written to the subject's stdin
    pub command: String,
    /// Expected output, may contain `$(NAME)` placeholders
    pub expected: String,
}

/// Errors that can occur when loading test cases
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read test file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Test name {name:?} must be non-empty, trimmed, and free of '.' and line breaks")]
    InvalidName { name: String },

    #[error("Test '{name}' has index 0; indices start at 1")]
    InvalidIndex { name: String },

    #[error("Duplicate test index {index} ('{first}' and '{second}')")]
    DuplicateIndex {
        index: usize,
        first: String,
        second: String,
    },

    #[error("No test with index {0}")]
    UnknownIndex(usize),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCase {
    #[serde(default)]
    index: Option<usize>,
    name: String,
    command: String,
    expected: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonSource {
    List(Vec<RawCase>),
    Table { tests: Vec<RawCase> },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSource {
    #[serde(default)]
    tests: Vec<RawCase>,
}

/// Load test cases from a file.
pub fn load(path: &Path) -> Result<Vec<TestCase>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().is_some_and(|e| e == "json") {
        from_json(&content)
    } else {
        from_toml(&content)
    }
}

/// Parse test cases from JSON text.
pub fn from_json(content: &str) -> Result<Vec<TestCase>, LoadError> {
    let source: JsonSource = serde_json::from_str(content)?;
    let raw = match source {
        JsonSource::List(cases) => cases,
        JsonSource::Table { tests } => tests,
    };
    build(raw)
}

/// Parse test cases from TOML text.
pub fn from_toml(content: &str) -> Result<Vec<TestCase>, LoadError> {
    let source: TomlSource = toml::from_str(content)?;
    build(source.tests)
}

fn build(raw: Vec<RawCase>) -> Result<Vec<TestCase>, LoadError> {
    let mut cases = Vec::with_capacity(raw.len());
    let mut seen: HashMap<usize, String> = HashMap::new();

    for (position, case) in raw.into_iter().enumerate() {
        if !is_loggable_name(&case.name) {
            return Err(LoadError::InvalidName { name: case.name });
        }
        let index = case.index.unwrap_or(position + 1);
        if index == 0 {
            return Err(LoadError::InvalidIndex { name: case.name });
        }
        if let Some(first) = seen.get(&index) {
            return Err(LoadError::DuplicateIndex {
                index,
                first: first.clone(),
                second: case.name,
            });
        }
        seen.insert(index, case.name.clone());
        cases.push(TestCase {
            index,
            name: case.name,
            command: case.command,
            expected: case.expected,
        });
    }

    cases.sort_by_key(|c| c.index);
    Ok(cases)
}

/// Pick cases by 1-based index, in the order requested.
///
/// Repeated indices select the case once.
pub fn select(cases: &[TestCase], indices: &[usize]) -> Result<Vec<TestCase>, LoadError> {
    let mut picked = Vec::with_capacity(indices.len());
    let mut seen = HashSet::new();

    for &index in indices {
        let case = cases
            .iter()
            .find(|c| c.index == index)
            .ok_or(LoadError::UnknownIndex(index))?;
        if seen.insert(index) {
            picked.push(case.clone());
        }
    }

    Ok(picked)
}

#[cfg(test)]
#[path = "case_tests.rs"]
mod tests;
