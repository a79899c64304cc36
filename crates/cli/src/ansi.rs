// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI escape sequence removal for captured subject output.

use regex::Regex;
use std::sync::LazyLock;

/// CSI sequences: ESC [ parameters, final letter. Covers SGR colors
/// (`ESC[1;32m`) as well as the mode toggles interactive shells emit
/// (`ESC[?2004h`).
///
/// OSC sequences: ESC ] payload, terminated by BEL or ESC \. Prompts use
/// these to set the terminal title (`ESC]0;user@host BEL`).
static ANSI_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]|\x1b\][^\x07\x1b]*(?:\x07|\x1b\\)").ok()
});

/// Strip ANSI CSI and OSC escape sequences, returning plain text.
pub fn strip_ansi(input: &str) -> String {
    match ANSI_REGEX.as_ref() {
        Some(re) => re.replace_all(input, "").into_owned(),
        None => input.to_string(),
    }
}

#[cfg(test)]
#[path = "ansi_tests.rs"]
mod tests;
