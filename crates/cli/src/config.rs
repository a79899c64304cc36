// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from TOML/JSON files.

use serde::{Deserialize, Serialize};
use shell_tester_results::StatusTokens;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shell-tester.toml";
/// Default subject binary
pub const DEFAULT_SUBJECT: &str = "./minishell";
/// Default test case source
pub const DEFAULT_TESTS: &str = "tests.json";
/// Default banner/prompt sentinel
pub const DEFAULT_PROMPT_MARKER: &str = "minishell";
/// Default termination command
pub const DEFAULT_EXIT_DIRECTIVE: &str = "exit";

fn default_subject() -> PathBuf {
    PathBuf::from(DEFAULT_SUBJECT)
}

fn default_tests() -> PathBuf {
    PathBuf::from(DEFAULT_TESTS)
}

fn default_prompt_marker() -> String {
    DEFAULT_PROMPT_MARKER.to_string()
}

fn default_exit_directive() -> String {
    DEFAULT_EXIT_DIRECTIVE.to_string()
}

/// Errors that can occur when loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Top-level harness configuration
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// Subject binary to test (default: "./minishell")
    #[serde(default = "default_subject")]
    pub subject: PathBuf,

    /// Test case source, JSON or TOML (default: "tests.json")
    #[serde(default = "default_tests")]
    pub tests: PathBuf,

    /// Substring identifying the subject's banner and prompt lines
    /// (default: "minishell"). Empty disables the filter.
    #[serde(default = "default_prompt_marker")]
    pub prompt_marker: String,

    /// Command sent after each test command to end the session
    /// (default: "exit")
    #[serde(default = "default_exit_directive")]
    pub exit_directive: String,

    /// Kill the subject if it runs longer than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Append the subject's stderr to the captured output
    #[serde(default)]
    pub capture_stderr: bool,

    /// Strip ANSI color sequences before filtering output lines
    #[serde(default)]
    pub strip_ansi: bool,

    /// Where to write `<name>.<status>` result lines
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_log: Option<PathBuf>,

    /// Result log status vocabulary
    #[serde(default)]
    pub status: StatusTokens,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            subject: default_subject(),
            tests: default_tests(),
            prompt_marker: default_prompt_marker(),
            exit_directive: default_exit_directive(),
            timeout_ms: None,
            capture_stderr: false,
            strip_ansi: false,
            results_log: None,
            status: StatusTokens::default(),
        }
    }
}

impl HarnessConfig {
    /// Load a configuration from a TOML or JSON file.
    ///
    /// Relative paths inside the file are resolved against the file's
    /// directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: HarnessConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };

        if let Some(base) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            config.rebase(base);
        }
        config.validate()?;
        Ok(config)
    }

    /// Pick and load the configuration: an explicit path, then
    /// `SHELL_TESTER_CONFIG`, then `./shell-tester.toml` when present,
    /// otherwise defaults. Returns the file that was loaded, if any.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(crate::env::config_path)
            .or_else(|| {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                local.is_file().then_some(local)
            });

        match path {
            Some(path) => {
                let config = Self::load(&path)?;
                Ok((config, Some(path)))
            }
            None => Ok((Self::default(), None)),
        }
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.exit_directive.trim().is_empty() {
            return Err(ConfigError::Validation(
                "exit_directive must not be empty".to_string(),
            ));
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "timeout_ms must be greater than zero".to_string(),
            ));
        }
        self.status.validate().map_err(ConfigError::Validation)
    }

    /// Serialize as TOML, the format `config show` and `config init` write.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn rebase(&mut self, base: &Path) {
        let join = |p: &Path| {
            if p.is_relative() {
                base.join(p)
            } else {
                p.to_path_buf()
            }
        };
        self.subject = join(&self.subject);
        self.tests = join(&self.tests);
        self.results_log = self.results_log.as_deref().map(join);
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
