// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result comparison CLI entry point.

use clap::Parser;
use shell_tester_compare::{compare_files, render_json, render_text, DiffSummary};
use shell_tester_results::StatusTokens;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

/// Compare two shell-tester result logs
#[derive(Parser, Debug)]
#[command(name = "result-compare", version)]
#[command(about = "Report improvements and regressions between two result logs")]
struct Cli {
    /// Result log from the earlier run
    old: PathBuf,

    /// Result log from the later run
    new: PathBuf,

    /// Token used for passing tests
    #[arg(long, default_value = "ok")]
    pass: String,

    /// Token used for failing tests
    #[arg(long, default_value = "ko")]
    fail: String,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let tokens = StatusTokens::new(cli.pass, cli.fail);

    if let Err(msg) = tokens.validate() {
        eprintln!("Error: {}", msg);
        return ExitCode::from(2);
    }

    let transitions = match compare_files(&cli.old, &cli.new, &tokens) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    if cli.json {
        match render_json(&transitions, &tokens) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(2);
            }
        }
    } else {
        let color = std::io::stdout().is_terminal();
        print!("{}", render_text(&transitions, &tokens, color));
    }

    if DiffSummary::from_transitions(&transitions).has_regressions() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
