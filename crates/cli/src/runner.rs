// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subject process execution.
//!
//! Every test gets a fresh subject process. The runner writes the test
//! command and the exit directive to the subject's stdin, closes it, and
//! collects everything the subject prints until it exits.

use crate::config::HarnessConfig;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, Command};
use tracing::{debug, warn};

/// Output captured from one subject run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawCapture {
    /// Stdout, followed by stderr when stderr capture is enabled
    pub output: String,
    /// Exit code, `None` if the subject was killed by a signal.
    /// Reported for diagnostics only; never judged.
    pub exit_code: Option<i32>,
}

#[derive(Debug, Error)]
pub enum RunError {
    #[error("Failed to spawn subject '{subject}': {source}")]
    Spawn {
        subject: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Subject I/O error: {0}")]
    Io(#[source] std::io::Error),

    #[error("Subject did not exit within {after_ms}ms")]
    Timeout { after_ms: u64 },
}

/// Something that can execute one scripted command.
pub trait Subject {
    fn run(&self, command: &str) -> impl Future<Output = Result<RawCapture, RunError>>;
}

/// Runs the subject binary as a child process.
#[derive(Clone, Debug)]
pub struct SubjectRunner {
    subject: PathBuf,
    exit_directive: String,
    timeout_ms: Option<u64>,
    capture_stderr: bool,
}

impl SubjectRunner {
    /// Create a runner for `subject` that ends each session with
    /// `exit_directive`
    pub fn new(subject: impl Into<PathBuf>, exit_directive: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            exit_directive: exit_directive.into(),
            timeout_ms: None,
            capture_stderr: false,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.subject, &config.exit_directive)
            .with_timeout(config.timeout_ms)
            .with_capture_stderr(config.capture_stderr)
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout_ms: Option<u64>) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Append stderr to the captured output
    pub fn with_capture_stderr(mut self, capture_stderr: bool) -> Self {
        self.capture_stderr = capture_stderr;
        self
    }

    pub fn subject(&self) -> &std::path::Path {
        &self.subject
    }

    /// Run one command against a fresh subject process.
    pub async fn run(&self, command: &str) -> Result<RawCapture, RunError> {
        debug!(subject = %self.subject.display(), command, "spawning subject");

        let child = Command::new(&self.subject)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(if self.capture_stderr {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .kill_on_drop(true) // Dropping the handle on timeout kills the subject
            .spawn()
            .map_err(|source| RunError::Spawn {
                subject: self.subject.clone(),
                source,
            })?;

        let session = self.session(child, command);
        match self.timeout_ms {
            Some(after_ms) => {
                match tokio::time::timeout(Duration::from_millis(after_ms), session).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!(subject = %self.subject.display(), after_ms, "subject timed out, killed");
                        Err(RunError::Timeout { after_ms })
                    }
                }
            }
            None => session.await,
        }
    }

    /// Feed the script and collect output until exit.
    ///
    /// Stdin is written while stdout is drained, so a subject echoing a long
    /// command cannot stall on a full pipe.
    async fn session(&self, mut child: Child, command: &str) -> Result<RawCapture, RunError> {
        let stdin = child.stdin.take();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(format!("{}\n", command).as_bytes()).await?;
                stdin
                    .write_all(format!("{}\n", self.exit_directive).as_bytes())
                    .await?;
                // Dropping stdin closes it, signalling EOF
            }
            Ok::<(), std::io::Error>(())
        };

        let ((), output) =
            tokio::try_join!(feed, child.wait_with_output()).map_err(RunError::Io)?;
        let exit_code = output.status.code();
        debug!(?exit_code, bytes = output.stdout.len(), "subject exited");

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if self.capture_stderr {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        Ok(RawCapture {
            output: text,
            exit_code,
        })
    }
}

impl Subject for SubjectRunner {
    async fn run(&self, command: &str) -> Result<RawCapture, RunError> {
        SubjectRunner::run(self, command).await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
