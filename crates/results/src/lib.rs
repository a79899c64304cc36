// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result records and result logs for shell-tester runs.
//!
//! A run produces one `<name>.<status>` line per test case. This crate owns
//! that format: the status vocabulary, parsing a log back into a
//! [`ResultSet`], and writing one incrementally with [`ResultLog`].

mod log;
mod paint;
mod parse;
mod record;
mod status;

pub use log::ResultLog;
pub use paint::{paint, paint_status, Tint};
pub use parse::{is_loggable_name, load, parse, FormatError, ResultsError, SEPARATOR};
pub use record::{ResultRecord, ResultSet};
pub use status::{Status, StatusTokens};
