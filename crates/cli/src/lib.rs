// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regression test harness for interactive shells.
//!
//! Each test case is a single command line and its expected output. The
//! harness starts a fresh subject process per case, writes the command and
//! an exit directive to its stdin, normalizes what comes back and judges it
//! against the expectation:
//!
//! ```text
//! case::load -> runner::SubjectRunner -> normalize::Normalizer -> verdict::judge
//! ```
//!
//! [`suite::Suite`] drives that pipeline case by case and records statuses
//! in a result log, which `shell_tester_compare` can diff across runs.

#[doc(hidden)]
pub mod ansi;
#[doc(hidden)]
pub mod app;
pub mod case;
#[doc(hidden)]
pub mod cli;
pub mod config;
pub mod env;
pub mod normalize;
#[doc(hidden)]
pub mod output;
pub mod runner;
pub mod suite;
pub mod verdict;

pub use case::{LoadError, TestCase};
pub use config::{ConfigError, HarnessConfig};
pub use normalize::Normalizer;
pub use runner::{RawCapture, RunError, Subject, SubjectRunner};
pub use suite::{CaseOutcome, CaseResult, Suite, SuiteReport};
pub use verdict::{judge, Verdict};
