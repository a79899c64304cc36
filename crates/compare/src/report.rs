// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of a diff.

use crate::diff::{DiffSummary, Transition, TransitionKind};
use serde::Serialize;
use shell_tester_results::{paint, paint_status, Status, StatusTokens, Tint};
use std::fmt::Write;

/// Render one transition as a report line (no trailing newline).
pub fn render_transition(t: &Transition, tokens: &StatusTokens, color: bool) -> String {
    let status = |s: &Status| paint_status(s, tokens.token(s), color);

    match (&t.old, &t.new) {
        (Some(old), None) => format!("{}: {} (missing in new results)", t.name, status(old)),
        (None, Some(new)) => format!("{}: {} (new results)", t.name, status(new)),
        (Some(old), Some(new)) => {
            let verdict = match t.kind {
                TransitionKind::Improved => paint(" -> Improved", Tint::Green, color),
                TransitionKind::Degraded => paint(" -> Degraded", Tint::Red, color),
                _ => " -> No change".to_string(),
            };
            format!("{}: [{}] [{}]{}", t.name, status(old), status(new), verdict)
        }
        (None, None) => t.name.clone(),
    }
}

/// Render every transition followed by a summary line.
pub fn render_text(transitions: &[Transition], tokens: &StatusTokens, color: bool) -> String {
    let mut out = String::new();
    for t in transitions {
        let _ = writeln!(out, "{}", render_transition(t, tokens, color));
    }
    let s = DiffSummary::from_transitions(transitions);
    let _ = writeln!(
        out,
        "\n{} improved, {} degraded, {} unchanged, {} added, {} removed",
        s.improved, s.degraded, s.unchanged, s.added, s.removed
    );
    out
}

#[derive(Serialize)]
struct JsonTransition<'a> {
    name: &'a str,
    kind: TransitionKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    old: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    new: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    transitions: Vec<JsonTransition<'a>>,
    summary: DiffSummary,
}

/// Render the diff as a JSON document, statuses spelled with `tokens`.
pub fn render_json(
    transitions: &[Transition],
    tokens: &StatusTokens,
) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        transitions: transitions
            .iter()
            .map(|t| JsonTransition {
                name: &t.name,
                kind: t.kind,
                old: t.old.as_ref().map(|s| tokens.token(s)),
                new: t.new.as_ref().map(|s| tokens.token(s)),
            })
            .collect(),
        summary: DiffSummary::from_transitions(transitions),
    };
    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
