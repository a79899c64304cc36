// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Two-valued status vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default token written for a passing case.
pub const DEFAULT_PASS_TOKEN: &str = "ok";
/// Default token written for a failing case.
pub const DEFAULT_FAIL_TOKEN: &str = "ko";

/// Status of one test in a result set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Pass,
    Fail,
    /// A token outside the configured vocabulary, kept verbatim.
    Other(String),
}

impl Status {
    /// Status for a boolean verdict.
    pub fn from_passed(passed: bool) -> Self {
        if passed {
            Status::Pass
        } else {
            Status::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Status::Pass)
    }
}

/// The pair of tokens a result log uses for pass and fail.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StatusTokens {
    #[serde(default = "default_pass")]
    pub pass: String,
    #[serde(default = "default_fail")]
    pub fail: String,
}

fn default_pass() -> String {
    DEFAULT_PASS_TOKEN.to_string()
}

fn default_fail() -> String {
    DEFAULT_FAIL_TOKEN.to_string()
}

impl Default for StatusTokens {
    fn default() -> Self {
        Self {
            pass: default_pass(),
            fail: default_fail(),
        }
    }
}

impl StatusTokens {
    pub fn new(pass: impl Into<String>, fail: impl Into<String>) -> Self {
        Self {
            pass: pass.into(),
            fail: fail.into(),
        }
    }

    /// Classify a raw token from a log line.
    pub fn status_of(&self, token: &str) -> Status {
        if token == self.pass {
            Status::Pass
        } else if token == self.fail {
            Status::Fail
        } else {
            Status::Other(token.to_string())
        }
    }

    /// Token to write for a status.
    pub fn token<'a>(&'a self, status: &'a Status) -> &'a str {
        match status {
            Status::Pass => &self.pass,
            Status::Fail => &self.fail,
            Status::Other(token) => token,
        }
    }

    /// Check that the vocabulary can round-trip through a result log.
    pub fn validate(&self) -> Result<(), String> {
        for token in [&self.pass, &self.fail] {
            if token.is_empty() {
                return Err("status tokens must not be empty".to_string());
            }
            if token.contains(crate::SEPARATOR) || token.chars().any(char::is_whitespace) {
                return Err(format!(
                    "status token '{}' must not contain '{}' or whitespace",
                    token,
                    crate::SEPARATOR
                ));
            }
        }
        if self.pass == self.fail {
            return Err(format!(
                "pass and fail tokens must differ (both are '{}')",
                self.pass
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => f.write_str("pass"),
            Status::Fail => f.write_str("fail"),
            Status::Other(token) => f.write_str(token),
        }
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
