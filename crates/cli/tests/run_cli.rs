// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Integration tests for the `shell-tester` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use rstest::rstest;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Banner, then echo each line and evaluate it until `exit`.
const FAKE_SHELL: &str = r#"#!/bin/sh
echo "minishell ready"
while IFS= read -r line; do
  printf '%s\n' "$line"
  [ "$line" = "exit" ] && exit 0
  eval "$line"
done
"#;

const PASSING: &str = r#"[
    {"name": "echo", "command": "echo hi", "expected": "hi"},
    {"name": "spaces", "command": "echo   a    b", "expected": "a b"}
]"#;

const MIXED: &str = r#"[
    {"name": "echo", "command": "echo hi", "expected": "hi"},
    {"name": "wrong", "command": "echo one", "expected": "two"}
]"#;

struct Workspace {
    dir: TempDir,
    config: PathBuf,
}

impl Workspace {
    fn new(tests_json: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let subject = dir.path().join("minishell");
        std::fs::write(&subject, FAKE_SHELL).unwrap();
        std::fs::set_permissions(&subject, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("tests.json"), tests_json).unwrap();

        let config = dir.path().join("shell-tester.toml");
        std::fs::write(
            &config,
            "subject = \"minishell\"\ntests = \"tests.json\"\nresults_log = \"results.log\"\ntimeout_ms = 5000\n",
        )
        .unwrap();
        Self { dir, config }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("shell-tester").unwrap();
        cmd.env_remove("SHELL_TESTER_CONFIG")
            .env_remove("SHELL_TESTER_LOG")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}

#[rstest]
#[case(PASSING, 0)]
#[case(MIXED, 1)]
#[case("{ not json", 2)]
fn test_run_exit_code(#[case] tests_json: &str, #[case] expected_exit: i32) {
    let ws = Workspace::new(tests_json);
    ws.command().arg("run").assert().code(expected_exit);
}

#[test]
fn test_run_prints_cases_and_summary() {
    let ws = Workspace::new(MIXED);

    ws.command()
        .arg("run")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[1] echo -> ok"))
        .stdout(predicate::str::contains(
            "[2] wrong -> ko (expected: \"two\", got: \"one\")",
        ))
        .stdout(predicate::str::contains("1 passed, 1 failed"));

    assert_eq!(read(&ws.path("results.log")), "echo.ok\nwrong.ko\n");
}

#[test]
fn test_run_show_diff() {
    let ws = Workspace::new(MIXED);

    ws.command()
        .args(["run", "--show-diff"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("    - two"))
        .stdout(predicate::str::contains("    + one"));
}

#[rstest]
#[case("2", "wrong.ko\n", 1)]
#[case("1", "echo.ok\n", 0)]
#[case("2,1", "wrong.ko\necho.ok\n", 1)]
fn test_run_selection(#[case] select: &str, #[case] log: &str, #[case] expected_exit: i32) {
    let ws = Workspace::new(MIXED);

    ws.command()
        .args(["run", "--select", select])
        .assert()
        .code(expected_exit);

    assert_eq!(read(&ws.path("results.log")), log);
}

#[test]
fn test_run_unknown_selection_is_fatal() {
    let ws = Workspace::new(PASSING);

    ws.command()
        .args(["run", "--select", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("9"));
}

#[test]
fn test_run_log_override() {
    let ws = Workspace::new(PASSING);
    let log = ws.path("other.log");

    ws.command()
        .arg("run")
        .arg("--log")
        .arg(&log)
        .assert()
        .success();

    assert_eq!(read(&log), "echo.ok\nspaces.ok\n");
    assert!(!ws.path("results.log").exists());
}

#[test]
fn test_run_timeout_fails_case() {
    let ws = Workspace::new(
        r#"[
            {"name": "hang", "command": "sleep 30", "expected": ""},
            {"name": "echo", "command": "echo hi", "expected": "hi"}
        ]"#,
    );

    ws.command()
        .args(["run", "--timeout-ms", "200"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[1] hang -> ko"))
        .stdout(predicate::str::contains("[2] echo -> ok"));

    assert_eq!(read(&ws.path("results.log")), "hang.ko\necho.ok\n");
}

#[test]
fn test_run_then_compare() {
    let ws = Workspace::new(PASSING);
    let baseline = ws.path("baseline.log");
    std::fs::write(&baseline, "echo.ko\nspaces.ok\nretired.ok\n").unwrap();

    ws.command().arg("run").assert().success();

    ws.command()
        .arg("compare")
        .arg(&baseline)
        .arg(ws.path("results.log"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("echo: [ko] [ok] -> Improved"))
        .stdout(predicate::str::contains("spaces: [ok] [ok] -> No change"))
        .stdout(predicate::str::contains("retired: ok (missing in new results)"));
}

#[test]
fn test_compare_json() {
    let ws = Workspace::new(PASSING);
    let old = ws.path("old.log");
    let new = ws.path("new.log");
    std::fs::write(&old, "t1.ko\n").unwrap();
    std::fs::write(&new, "t1.ok\nt2.ok\n").unwrap();

    ws.command()
        .args(["compare", "--json"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"improved\""))
        .stdout(predicate::str::contains("\"kind\": \"added\""));
}

#[test]
fn test_config_show_reports_source() {
    let ws = Workspace::new(PASSING);

    ws.command()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shell-tester.toml"))
        .stdout(predicate::str::contains("exit_directive = \"exit\""))
        .stdout(predicate::str::contains("timeout_ms = 5000"));
}

#[test]
fn test_config_init_refuses_overwrite() {
    let ws = Workspace::new(PASSING);
    let target = ws.path("fresh.toml");

    ws.command()
        .args(["config", "init"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(read(&target).contains("prompt_marker"));

    ws.command()
        .args(["config", "init"])
        .arg(&target)
        .assert()
        .code(2);
}

#[test]
fn test_config_edit_reloads() {
    let ws = Workspace::new(PASSING);

    ws.command()
        .env("VISUAL", "true")
        .args(["config", "edit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Reloaded"));
}

#[test]
fn test_invalid_config_is_fatal() {
    let ws = Workspace::new(PASSING);
    std::fs::write(&ws.config, "no_such_key = 1\n").unwrap();

    ws.command().arg("run").assert().code(2);
}
