// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the `result-compare` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_logs(old: &str, new: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let old_path = dir.path().join("old.log");
    let new_path = dir.path().join("new.log");
    std::fs::write(&old_path, old).unwrap();
    std::fs::write(&new_path, new).unwrap();
    (dir, old_path, new_path)
}

fn result_compare() -> Command {
    Command::cargo_bin("result-compare").unwrap()
}

#[test]
fn reports_transitions_and_fails_on_regression() {
    let (_dir, old, new) = write_logs("t1.ko\nt2.ok\nt3.ok\n", "t1.ok\nt2.ko\nt4.ok\n");

    result_compare()
        .arg(&old)
        .arg(&new)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("t1: [ko] [ok] -> Improved"))
        .stdout(predicate::str::contains("t2: [ok] [ko] -> Degraded"))
        .stdout(predicate::str::contains("t3: ok (missing in new results)"))
        .stdout(predicate::str::contains("t4: ok (new results)"));
}

#[test]
fn succeeds_without_regressions() {
    let (_dir, old, new) = write_logs("t1.ko\n", "t1.ok\n");
    result_compare().arg(&old).arg(&new).assert().success();
}

#[test]
fn malformed_log_is_fatal() {
    let (_dir, old, new) = write_logs("badline\n", "t1.ok\n");

    result_compare()
        .arg(&old)
        .arg(&new)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("badline"));
}

#[test]
fn custom_vocabulary() {
    let (_dir, old, new) = write_logs("t1.FAIL\n", "t1.PASS\n");

    result_compare()
        .args(["--pass", "PASS", "--fail", "FAIL"])
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("t1: [FAIL] [PASS] -> Improved"));
}

#[test]
fn json_output() {
    let (_dir, old, new) = write_logs("t1.ok\n", "t1.ok\n");

    result_compare()
        .arg("--json")
        .arg(&old)
        .arg(&new)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"unchanged\""));
}
