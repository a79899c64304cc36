// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail judgment for one test case.

use crate::case::TestCase;

/// Outcome of comparing normalized output against the expectation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub test_index: usize,
    pub test_name: String,
    pub passed: bool,
    pub expected: String,
    pub actual: String,
}

/// Judge a case by exact equality of normalized values.
pub fn judge(case: &TestCase, actual: String, expected: String) -> Verdict {
    Verdict {
        test_index: case.index,
        test_name: case.name.clone(),
        passed: actual == expected,
        expected,
        actual,
    }
}

#[cfg(test)]
#[path = "verdict_tests.rs"]
mod tests;
