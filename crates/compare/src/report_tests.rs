#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use crate::diff::diff;
use shell_tester_results::parse;

fn transitions() -> Vec<Transition> {
    let tokens = StatusTokens::default();
    let old = parse("t1.ko\nt2.ok\nt3.ok\nt5.ok\n", &tokens).unwrap();
    let new = parse("t1.ok\nt2.ko\nt4.ok\nt5.ok\n", &tokens).unwrap();
    diff(&old, &new)
}

#[test]
fn plain_text_report() {
    let text = render_text(&transitions(), &StatusTokens::default(), false);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "t1: [ko] [ok] -> Improved");
    assert_eq!(lines[1], "t2: [ok] [ko] -> Degraded");
    assert_eq!(lines[2], "t3: ok (missing in new results)");
    assert_eq!(lines[3], "t4: ok (new results)");
    assert_eq!(lines[4], "t5: [ok] [ok] -> No change");
    assert_eq!(
        lines.last().copied(),
        Some("1 improved, 1 degraded, 1 unchanged, 1 added, 1 removed")
    );
}

#[test]
fn colored_report_marks_improvements_green() {
    let line = render_transition(&transitions()[0], &StatusTokens::default(), true);
    assert!(line.contains("\x1b[32m -> Improved\x1b[0m"));
}

#[test]
fn json_report_uses_tokens() {
    let json = render_json(&transitions(), &StatusTokens::default()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["transitions"][0]["kind"], "improved");
    assert_eq!(value["transitions"][0]["old"], "ko");
    assert_eq!(value["transitions"][2]["kind"], "removed");
    assert!(value["transitions"][2].get("new").is_none());
    assert_eq!(value["summary"]["degraded"], 1);
}
