// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output normalization.
//!
//! Captured output is filtered line by line before comparison:
//! 1. trim surrounding whitespace
//! 2. drop lines containing the prompt marker
//! 3. drop the echoed command
//! 4. drop lines containing the exit directive
//! 5. drop empty lines
//!
//! Expected text has `$(NAME)` placeholders resolved against the
//! environment at comparison time.

use crate::config::HarnessConfig;

/// Placeholder opening, as in `$(HOME)`.
pub const PLACEHOLDER_OPEN: &str = "$(";
/// Placeholder closing.
pub const PLACEHOLDER_CLOSE: &str = ")";

#[derive(Clone, Debug)]
pub struct Normalizer {
    prompt_marker: String,
    exit_directive: String,
    strip_ansi: bool,
}

impl Normalizer {
    pub fn new(prompt_marker: impl Into<String>, exit_directive: impl Into<String>) -> Self {
        Self {
            prompt_marker: prompt_marker.into(),
            exit_directive: exit_directive.into(),
            strip_ansi: false,
        }
    }

    pub fn from_config(config: &HarnessConfig) -> Self {
        Self::new(&config.prompt_marker, &config.exit_directive).with_strip_ansi(config.strip_ansi)
    }

    /// Remove ANSI escape sequences before filtering
    pub fn with_strip_ansi(mut self, strip_ansi: bool) -> Self {
        self.strip_ansi = strip_ansi;
        self
    }

    /// Normalize captured output for the given test command.
    pub fn normalize(&self, raw: &str, command: &str) -> String {
        let stripped;
        let raw = if self.strip_ansi {
            stripped = crate::ansi::strip_ansi(raw);
            stripped.as_str()
        } else {
            raw
        };

        let command = command.trim();
        raw.lines()
            .map(str::trim)
            .filter(|line| !self.is_noise(line, command))
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    fn is_noise(&self, line: &str, command: &str) -> bool {
        // Empty marker or directive would match every line
        (!self.prompt_marker.is_empty() && line.contains(&self.prompt_marker))
            || line == command
            || (!self.exit_directive.is_empty() && line.contains(&self.exit_directive))
            || line.is_empty()
    }

    /// Normalize expected text, resolving placeholders from the process
    /// environment.
    pub fn normalize_expected(&self, expected: &str) -> String {
        normalize_expected_with(expected, crate::env::lookup)
    }
}

/// Normalize expected text with an explicit variable lookup.
///
/// Each line is split on whitespace, placeholder tokens are substituted
/// when `lookup` yields a non-empty value, and tokens are rejoined with
/// single spaces. Empty lines are dropped.
pub fn normalize_expected_with<F>(expected: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    expected
        .lines()
        .map(|line| {
            line.split_whitespace()
                .map(|token| resolve_token(token, &lookup))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

/// Name inside a `$(NAME)` token, if the whole token is a placeholder.
pub fn placeholder_name(token: &str) -> Option<&str> {
    let name = token
        .strip_prefix(PLACEHOLDER_OPEN)?
        .strip_suffix(PLACEHOLDER_CLOSE)?;
    if name.is_empty() || name.contains(['(', ')']) {
        return None;
    }
    Some(name)
}

fn resolve_token<F>(token: &str, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    placeholder_name(token)
        .and_then(lookup)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| token.to_string())
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
