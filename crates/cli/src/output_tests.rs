#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::runner::RunError;

fn judged(index: usize, name: &str, expected: &str, actual: &str, exit_code: Option<i32>) -> CaseResult {
    CaseResult {
        index,
        name: name.to_string(),
        outcome: CaseOutcome::Judged(Verdict {
            test_index: index,
            test_name: name.to_string(),
            passed: expected == actual,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }),
        exit_code,
    }
}

fn errored(index: usize, name: &str) -> CaseResult {
    CaseResult {
        index,
        name: name.to_string(),
        outcome: CaseOutcome::Errored(RunError::Timeout { after_ms: 50 }),
        exit_code: None,
    }
}

#[test]
fn pass_line() {
    let line = render_case(&judged(1, "echo", "hi", "hi", Some(0)), &StatusTokens::default(), false);
    assert_eq!(line, "[1] echo -> ok");
}

#[test]
fn fail_line_shows_both_values() {
    let line = render_case(&judged(2, "pwd", "/a\n/b", "/a", Some(0)), &StatusTokens::default(), false);
    assert_eq!(line, "[2] pwd -> ko (expected: \"/a\\n/b\", got: \"/a\")");
}

#[test]
fn fail_line_notes_exit_code() {
    let line = render_case(&judged(3, "bad", "x", "y", Some(127)), &StatusTokens::default(), false);
    assert!(line.ends_with(", exit code 127)"));
}

#[test]
fn errored_line_shows_error() {
    let line = render_case(&errored(4, "hang"), &StatusTokens::default(), false);
    assert_eq!(line, "[4] hang -> ko (Subject did not exit within 50ms)");
}

#[test]
fn custom_tokens_and_color() {
    let tokens = StatusTokens::new("PASS", "FAIL");
    let line = render_case(&judged(1, "echo", "hi", "hi", Some(0)), &tokens, true);
    assert_eq!(line, "[1] echo -> \x1b[32mPASS\x1b[0m");
}

#[test]
fn diff_marks_changed_lines() {
    let result = judged(1, "ls", "a\nb\nc", "a\nB\nc", Some(0));
    let CaseOutcome::Judged(ref verdict) = result.outcome else {
        panic!("expected verdict");
    };
    let diff = render_diff(verdict, false);
    let lines: Vec<_> = diff.lines().map(str::trim_end).collect();
    assert_eq!(lines, vec!["      a", "    - b", "    + B", "      c"]);
}

#[test]
fn summary_counts() {
    let report = SuiteReport {
        results: vec![
            judged(1, "a", "x", "x", Some(0)),
            judged(2, "b", "x", "y", Some(0)),
            errored(3, "c"),
        ],
    };
    assert_eq!(render_summary(&report, false), "1 passed, 2 failed (1 could not run)");
}

#[test]
fn summary_without_errors() {
    let report = SuiteReport {
        results: vec![judged(1, "a", "x", "x", Some(0))],
    };
    assert_eq!(render_summary(&report, false), "1 passed, 0 failed");
}

#[test]
fn error_plain_text_when_not_terminal() {
    let mut buf = Vec::new();
    write_labeled(&mut buf, "Error", Tint::Red, "something went wrong", false);
    assert_eq!(String::from_utf8(buf).unwrap(), "Error: something went wrong\n");
}

#[test]
fn warning_with_ansi_when_terminal() {
    let mut buf = Vec::new();
    write_labeled(
        &mut buf,
        "Warning",
        Tint::Yellow,
        format_args!("retrying {} times", 5),
        true,
    );
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "\x1b[33mWarning: retrying 5 times\x1b[0m\n"
    );
}
