// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential suite execution.
//!
//! Each case runs to completion (spawn, script, exit, capture) before the
//! next one starts. A case whose subject cannot be run is reported as
//! failed and the suite carries on.

use crate::case::TestCase;
use crate::normalize::Normalizer;
use crate::runner::{RunError, Subject};
use crate::verdict::{judge, Verdict};
use shell_tester_results::{ResultLog, Status};
use thiserror::Error;
use tracing::{debug, info, warn};

/// What happened to one case.
#[derive(Debug)]
pub enum CaseOutcome {
    /// The subject ran and its output was judged
    Judged(Verdict),
    /// The subject could not be run to completion
    Errored(RunError),
}

#[derive(Debug)]
pub struct CaseResult {
    pub index: usize,
    pub name: String,
    pub outcome: CaseOutcome,
    /// Subject exit code, for diagnostics
    pub exit_code: Option<i32>,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        matches!(&self.outcome, CaseOutcome::Judged(v) if v.passed)
    }

    pub fn status(&self) -> Status {
        Status::from_passed(self.passed())
    }
}

/// Results of a suite run, in execution order.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub results: Vec<CaseResult>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Cases that failed because the subject could not be run.
    pub fn errored(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, CaseOutcome::Errored(_)))
            .count()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

#[derive(Debug, Error)]
pub enum SuiteError {
    #[error("Failed to write result log: {0}")]
    Log(#[from] std::io::Error),
}

/// Runs test cases against a subject and judges them.
pub struct Suite<S> {
    subject: S,
    normalizer: Normalizer,
    log: Option<ResultLog>,
}

impl<S: Subject> Suite<S> {
    pub fn new(subject: S, normalizer: Normalizer) -> Self {
        Self {
            subject,
            normalizer,
            log: None,
        }
    }

    /// Record every case's status in `log`
    pub fn with_log(mut self, log: ResultLog) -> Self {
        self.log = Some(log);
        self
    }

    /// Run, normalize and judge a single case.
    pub async fn run_case(&self, case: &TestCase) -> CaseResult {
        debug!(index = case.index, name = %case.name, "running case");

        let (outcome, exit_code) = match self.subject.run(&case.command).await {
            Ok(capture) => {
                let actual = self.normalizer.normalize(&capture.output, &case.command);
                let expected = self.normalizer.normalize_expected(&case.expected);
                (
                    CaseOutcome::Judged(judge(case, actual, expected)),
                    capture.exit_code,
                )
            }
            Err(e) => {
                warn!(index = case.index, name = %case.name, error = %e, "case did not run");
                (CaseOutcome::Errored(e), None)
            }
        };

        CaseResult {
            index: case.index,
            name: case.name.clone(),
            outcome,
            exit_code,
        }
    }

    /// Run cases in order, handing each result to `on_result` as soon as it
    /// is known.
    pub async fn run<F>(&self, cases: &[TestCase], mut on_result: F) -> Result<SuiteReport, SuiteError>
    where
        F: FnMut(&CaseResult),
    {
        let mut report = SuiteReport::default();

        for case in cases {
            let result = self.run_case(case).await;
            if let Some(ref log) = self.log {
                log.record(&result.name, result.status())?;
            }
            on_result(&result);
            report.results.push(result);
        }

        info!(
            total = report.results.len(),
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "suite_tests.rs"]
mod tests;
