// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named result records.

use crate::status::Status;
use std::collections::btree_map;
use std::collections::BTreeMap;

/// One test's recorded status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultRecord {
    pub name: String,
    pub status: Status,
}

impl ResultRecord {
    pub fn new(name: impl Into<String>, status: Status) -> Self {
        Self {
            name: name.into(),
            status,
        }
    }
}

/// Result records keyed by test name, iterated in name order.
///
/// Inserting a name twice keeps the later record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: BTreeMap<String, ResultRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: ResultRecord) {
        self.records.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&ResultRecord> {
        self.records.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> btree_map::Values<'_, String, ResultRecord> {
        self.records.values()
    }
}

impl FromIterator<ResultRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = ResultRecord>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        for record in iter {
            set.insert(record);
        }
        set
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = btree_map::Values<'a, String, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
