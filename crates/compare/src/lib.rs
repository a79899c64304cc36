// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result log comparison for shell-tester.
//!
//! Loads two result logs, classifies how each test's status moved between
//! them and renders the outcome for humans or tools.

pub mod diff;
pub mod report;

pub use diff::{classify, diff, DiffSummary, Transition, TransitionKind};
pub use report::{render_json, render_text, render_transition};

use shell_tester_results::{load, ResultsError, StatusTokens};
use std::path::Path;

/// Load two result logs and diff them. Either log failing to parse aborts
/// the comparison.
pub fn compare_files(
    old: &Path,
    new: &Path,
    tokens: &StatusTokens,
) -> Result<Vec<Transition>, ResultsError> {
    let old_set = load(old, tokens)?;
    let new_set = load(new, tokens)?;
    Ok(diff(&old_set, &new_set))
}
