// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Status transition classification between two result sets.

use serde::Serialize;
use shell_tester_results::{ResultSet, Status};

/// How a test's status moved between the old and new result sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Failing before, passing now.
    Improved,
    /// Any other change of status.
    Degraded,
    Unchanged,
    /// Only present in the new set.
    Added,
    /// Only present in the old set.
    Removed,
}

/// One test's transition. `old` is `None` for `Added`, `new` is `None` for
/// `Removed`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub name: String,
    pub kind: TransitionKind,
    pub old: Option<Status>,
    pub new: Option<Status>,
}

/// Classify a pair of statuses for a test present in both sets.
pub fn classify(old: &Status, new: &Status) -> TransitionKind {
    match (old, new) {
        (Status::Fail, Status::Pass) => TransitionKind::Improved,
        (old, new) if old == new => TransitionKind::Unchanged,
        _ => TransitionKind::Degraded,
    }
}

/// Compare two result sets. The output is sorted by test name.
pub fn diff(old: &ResultSet, new: &ResultSet) -> Vec<Transition> {
    let mut transitions = Vec::with_capacity(old.len().max(new.len()));

    for old_record in old {
        let transition = match new.get(&old_record.name) {
            Some(new_record) => Transition {
                name: old_record.name.clone(),
                kind: classify(&old_record.status, &new_record.status),
                old: Some(old_record.status.clone()),
                new: Some(new_record.status.clone()),
            },
            None => Transition {
                name: old_record.name.clone(),
                kind: TransitionKind::Removed,
                old: Some(old_record.status.clone()),
                new: None,
            },
        };
        transitions.push(transition);
    }

    for new_record in new {
        if !old.contains(&new_record.name) {
            transitions.push(Transition {
                name: new_record.name.clone(),
                kind: TransitionKind::Added,
                old: None,
                new: Some(new_record.status.clone()),
            });
        }
    }

    transitions.sort_by(|a, b| a.name.cmp(&b.name));
    transitions
}

/// Counts of each transition kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffSummary {
    pub improved: usize,
    pub degraded: usize,
    pub unchanged: usize,
    pub added: usize,
    pub removed: usize,
}

impl DiffSummary {
    pub fn from_transitions(transitions: &[Transition]) -> Self {
        let mut summary = Self::default();
        for t in transitions {
            match t.kind {
                TransitionKind::Improved => summary.improved += 1,
                TransitionKind::Degraded => summary.degraded += 1,
                TransitionKind::Unchanged => summary.unchanged += 1,
                TransitionKind::Added => summary.added += 1,
                TransitionKind::Removed => summary.removed += 1,
            }
        }
        summary
    }

    /// A test got worse or disappeared.
    pub fn has_regressions(&self) -> bool {
        self.degraded > 0 || self.removed > 0
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
