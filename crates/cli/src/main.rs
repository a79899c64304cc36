// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! shell-tester binary entry point.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use shell_tester::app::{self, EXIT_ERROR};
use shell_tester::cli::Cli;
use shell_tester::output::print_error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = shell_tester::env::log_filter()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let code = match app::run(cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            EXIT_ERROR
        }
    };
    std::process::exit(code);
}
