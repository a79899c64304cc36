// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result log writer.

use crate::record::{ResultRecord, ResultSet};
use crate::status::{Status, StatusTokens};
use crate::SEPARATOR;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Records test results in run order, optionally mirroring them to a file.
pub struct ResultLog {
    tokens: StatusTokens,
    records: Arc<Mutex<Vec<ResultRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl ResultLog {
    /// Create a new in-memory result log
    pub fn new(tokens: StatusTokens) -> Self {
        Self {
            tokens,
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a result log that writes `<name>.<status>` lines to a file
    pub fn with_file(path: &Path, tokens: StatusTokens) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            tokens,
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record a result. Each line is flushed so an aborted run leaves a
    /// readable partial log.
    pub fn record(&self, name: &str, status: Status) -> std::io::Result<()> {
        let record = ResultRecord::new(name, status);

        if let Some(ref writer) = self.file_writer {
            let mut w = writer.lock();
            writeln!(w, "{}", self.line(&record))?;
            w.flush()?;
        }

        self.records.lock().push(record);
        Ok(())
    }

    /// Render one record as a log line.
    pub fn line(&self, record: &ResultRecord) -> String {
        format!(
            "{}{}{}",
            record.name,
            SEPARATOR,
            self.tokens.token(&record.status)
        )
    }

    /// All records, in the order they were recorded
    pub fn records(&self) -> Vec<ResultRecord> {
        self.records.lock().clone()
    }

    /// Records keyed by name (later duplicates win)
    pub fn to_set(&self) -> ResultSet {
        self.records.lock().iter().cloned().collect()
    }

    /// Full log text, one line per record
    pub fn render(&self) -> String {
        self.records
            .lock()
            .iter()
            .map(|r| format!("{}\n", self.line(r)))
            .collect()
    }

    pub fn tokens(&self) -> &StatusTokens {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl Clone for ResultLog {
    fn clone(&self) -> Self {
        Self {
            tokens: self.tokens.clone(),
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
