// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report lines for suite runs and diagnostic messages.
//!
//! Rendering functions take an explicit `color` flag; the `print_*`
//! helpers derive it from whether the stream is a terminal.

use crate::suite::{CaseOutcome, CaseResult, SuiteReport};
use crate::verdict::Verdict;
use shell_tester_results::{paint, paint_status, StatusTokens, Tint};
use similar::{ChangeTag, TextDiff};
use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

/// One line per case: `<name> -> ok` or `<name> -> ko (<detail>)`.
pub fn render_case(result: &CaseResult, tokens: &StatusTokens, color: bool) -> String {
    let status = result.status();
    let token = paint_status(&status, tokens.token(&status), color);
    let head = format!("[{}] {} -> {}", result.index, result.name, token);

    match &result.outcome {
        CaseOutcome::Judged(v) if v.passed => head,
        CaseOutcome::Judged(v) => format!(
            "{} (expected: {:?}, got: {:?}{})",
            head,
            v.expected,
            v.actual,
            exit_note(result.exit_code)
        ),
        CaseOutcome::Errored(e) => format!("{} ({})", head, e),
    }
}

fn exit_note(exit_code: Option<i32>) -> String {
    match exit_code {
        Some(0) => String::new(),
        Some(code) => format!(", exit code {}", code),
        None => ", killed by signal".to_string(),
    }
}

/// Line diff from expected to actual, `-` for expected-only lines and `+`
/// for actual-only lines.
pub fn render_diff(verdict: &Verdict, color: bool) -> String {
    let diff = TextDiff::from_lines(&verdict.expected, &verdict.actual);
    let mut out = String::new();

    for change in diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        let rendered = match change.tag() {
            ChangeTag::Delete => paint(&format!("- {}", line), Tint::Red, color),
            ChangeTag::Insert => paint(&format!("+ {}", line), Tint::Green, color),
            ChangeTag::Equal => paint(&format!("  {}", line), Tint::Dim, color),
        };
        let _ = writeln!(out, "    {}", rendered);
    }
    out
}

/// Final tally, e.g. `3 passed, 1 failed (1 could not run)`.
pub fn render_summary(report: &SuiteReport, color: bool) -> String {
    let passed = paint(&format!("{} passed", report.passed()), Tint::Green, color);
    let failed_text = format!("{} failed", report.failed());
    let failed = if report.failed() > 0 {
        paint(&failed_text, Tint::Red, color)
    } else {
        failed_text
    };

    match report.errored() {
        0 => format!("{}, {}", passed, failed),
        n => format!("{}, {} ({} could not run)", passed, failed, n),
    }
}

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_labeled(&mut io::stderr(), "Error", Tint::Red, msg, is_tty);
}

/// Print a warning message to stderr.
///
/// Displays in yellow when stderr is a terminal, plain text otherwise.
pub fn print_warning(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    write_labeled(&mut io::stderr(), "Warning", Tint::Yellow, msg, is_tty);
}

fn write_labeled<W: Write>(
    writer: &mut W,
    label: &str,
    tint: Tint,
    msg: impl std::fmt::Display,
    is_terminal: bool,
) {
    let _ = writeln!(
        writer,
        "{}",
        paint(&format!("{}: {}", label, msg), tint, is_terminal)
    );
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
