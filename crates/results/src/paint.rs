// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ANSI decoration for status tokens and verdict text.
//!
//! Stateless: callers decide whether color is enabled (usually from
//! `IsTerminal`) and pass it in.

use crate::status::Status;

/// Foreground colors used in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Red,
    Green,
    Yellow,
    Dim,
}

impl Tint {
    fn code(self) -> &'static str {
        match self {
            Tint::Red => "\x1b[31m",
            Tint::Green => "\x1b[32m",
            Tint::Yellow => "\x1b[33m",
            Tint::Dim => "\x1b[2m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Wrap `text` in `tint` when `color` is set.
pub fn paint(text: &str, tint: Tint, color: bool) -> String {
    if color {
        format!("{}{}{}", tint.code(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Render a status token: green for pass, red otherwise.
pub fn paint_status(status: &Status, token: &str, color: bool) -> String {
    let tint = if status.is_pass() {
        Tint::Green
    } else {
        Tint::Red
    };
    paint(token, tint, color)
}

#[cfg(test)]
#[path = "paint_tests.rs"]
mod tests;
