// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::HarnessConfig;

/// Regression test harness for interactive shells
#[derive(Parser, Debug, Clone)]
#[command(name = "shell-tester", version, about)]
pub struct Cli {
    /// Configuration file (default: $SHELL_TESTER_CONFIG, then ./shell-tester.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Run all test cases, or a selection by index
    Run(RunArgs),

    /// Compare two result logs and report regressions
    Compare {
        /// Result log from the earlier run
        old: PathBuf,
        /// Result log from the later run
        new: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// 1-based indices of the cases to run, e.g. `--select 1,4,7`
    #[arg(long, short = 's', value_delimiter = ',')]
    pub select: Vec<usize>,

    /// Subject binary (overrides config)
    #[arg(long)]
    pub subject: Option<PathBuf>,

    /// Test case file (overrides config)
    #[arg(long)]
    pub tests: Option<PathBuf>,

    /// Write `<name>.<status>` lines here (overrides config)
    #[arg(long)]
    pub log: Option<PathBuf>,

    /// Kill the subject after this many milliseconds (overrides config)
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Show a line diff for failing cases
    #[arg(long)]
    pub show_diff: bool,
}

impl RunArgs {
    /// Apply command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut HarnessConfig) {
        if let Some(ref subject) = self.subject {
            config.subject = subject.clone();
        }
        if let Some(ref tests) = self.tests {
            config.tests = tests.clone();
        }
        if let Some(ref log) = self.log {
            config.results_log = Some(log.clone());
        }
        if self.timeout_ms.is_some() {
            config.timeout_ms = self.timeout_ms;
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write it
        #[arg(default_value = crate::config::DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },

    /// Open the configuration in $VISUAL/$EDITOR, then reload and validate it
    Edit,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
