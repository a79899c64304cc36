// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.
//!
//! Harness-level variables are named here. Placeholder resolution for
//! expected output goes through [`lookup`] so tests can substitute the
//! environment.

use std::path::PathBuf;

/// Path of the configuration file to load.
pub const SHELL_TESTER_CONFIG: &str = "SHELL_TESTER_CONFIG";
/// `tracing` filter directive for harness logs.
pub const SHELL_TESTER_LOG: &str = "SHELL_TESTER_LOG";
pub const VISUAL: &str = "VISUAL";
pub const EDITOR: &str = "EDITOR";

/// `SHELL_TESTER_CONFIG`: configuration file override.
pub fn config_path() -> Option<PathBuf> {
    lookup(SHELL_TESTER_CONFIG).map(PathBuf::from)
}

/// `SHELL_TESTER_LOG`: log filter, e.g. `debug` or `shell_tester=trace`.
pub fn log_filter() -> Option<String> {
    lookup(SHELL_TESTER_LOG)
}

/// `VISUAL`, then `EDITOR`, then `vi`.
pub fn editor() -> String {
    lookup(VISUAL)
        .or_else(|| lookup(EDITOR))
        .unwrap_or_else(|| "vi".to_string())
}

/// Value of `name` in the process environment, treating empty as unset.
pub fn lookup(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
