// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Subcommand execution.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use shell_tester_compare::{compare_files, render_json, render_text, DiffSummary};
use shell_tester_results::{ResultLog, ResultsError};
use thiserror::Error;
use tracing::{debug, info};

use crate::case::{self, LoadError};
use crate::cli::{Cli, Command, ConfigCommand, RunArgs};
use crate::config::{ConfigError, HarnessConfig, DEFAULT_CONFIG_FILE};
use crate::normalize::Normalizer;
use crate::output::{print_warning, render_case, render_diff, render_summary};
use crate::runner::SubjectRunner;
use crate::suite::{CaseOutcome, Suite, SuiteError};

/// Process exit code when every case passed / no regressions.
pub const EXIT_OK: i32 = 0;
/// Process exit code when a case failed / a regression was found.
pub const EXIT_FAILED: i32 = 1;
/// Process exit code for errors that stop the command.
pub const EXIT_ERROR: i32 = 2;

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Suite(#[from] SuiteError),

    #[error(transparent)]
    Results(#[from] ResultsError),

    #[error("Failed to open result log '{path}': {source}")]
    ResultLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to overwrite existing file '{0}'")]
    Exists(PathBuf),

    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to launch editor '{editor}': {source}")]
    Editor {
        editor: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Run the parsed command line, returning the process exit code.
pub async fn run(cli: Cli) -> Result<i32, AppError> {
    match cli.command {
        Command::Run(ref args) => run_suite(cli.config.as_deref(), args).await,
        Command::Compare { ref old, ref new, json } => {
            compare(cli.config.as_deref(), old, new, json)
        }
        Command::Config(ref cmd) => run_config(cli.config.as_deref(), cmd).await,
    }
}

async fn run_suite(config_path: Option<&Path>, args: &RunArgs) -> Result<i32, AppError> {
    let (mut config, source) = HarnessConfig::resolve(config_path)?;
    args.apply(&mut config);
    config.validate()?;
    debug!(config = ?source, subject = %config.subject.display(), "configuration loaded");

    let cases = case::load(&config.tests)?;
    let cases = if args.select.is_empty() {
        cases
    } else {
        case::select(&cases, &args.select)?
    };
    info!(count = cases.len(), tests = %config.tests.display(), "loaded test cases");

    if !config.subject.exists() {
        print_warning(format_args!(
            "subject '{}' does not exist; every case will fail to spawn",
            config.subject.display()
        ));
    }

    let mut suite = Suite::new(
        SubjectRunner::from_config(&config),
        Normalizer::from_config(&config),
    );
    if let Some(ref path) = config.results_log {
        let log = ResultLog::with_file(path, config.status.clone()).map_err(|source| {
            AppError::ResultLog {
                path: path.clone(),
                source,
            }
        })?;
        suite = suite.with_log(log);
    }

    let color = std::io::stdout().is_terminal();
    let report = suite
        .run(&cases, |result| {
            println!("{}", render_case(result, &config.status, color));
            if args.show_diff {
                if let CaseOutcome::Judged(ref verdict) = result.outcome {
                    if !verdict.passed {
                        print!("{}", render_diff(verdict, color));
                    }
                }
            }
        })
        .await?;

    println!("\n{}", render_summary(&report, color));
    Ok(if report.all_passed() {
        EXIT_OK
    } else {
        EXIT_FAILED
    })
}

fn compare(config_path: Option<&Path>, old: &Path, new: &Path, json: bool) -> Result<i32, AppError> {
    let (config, _) = HarnessConfig::resolve(config_path)?;
    let transitions = compare_files(old, new, &config.status)?;

    if json {
        println!("{}", render_json(&transitions, &config.status)?);
    } else {
        let color = std::io::stdout().is_terminal();
        print!("{}", render_text(&transitions, &config.status, color));
    }

    Ok(if DiffSummary::from_transitions(&transitions).has_regressions() {
        EXIT_FAILED
    } else {
        EXIT_OK
    })
}

async fn run_config(config_path: Option<&Path>, cmd: &ConfigCommand) -> Result<i32, AppError> {
    match cmd {
        ConfigCommand::Show => {
            let (config, source) = HarnessConfig::resolve(config_path)?;
            match source {
                Some(path) => println!("# {}", path.display()),
                None => println!("# defaults (no configuration file found)"),
            }
            print!("{}", config.to_toml()?);
            Ok(EXIT_OK)
        }
        ConfigCommand::Init { path } => {
            init_config(path)?;
            println!("Wrote {}", path.display());
            Ok(EXIT_OK)
        }
        ConfigCommand::Edit => {
            let path = config_path
                .map(Path::to_path_buf)
                .or_else(crate::env::config_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
            if !path.exists() {
                init_config(&path)?;
            }

            let status = open_editor(&path).await?;
            if !status.success() {
                print_warning(format_args!("editor exited with {}", status));
            }

            // Reload replaces the held configuration; nothing is patched in place
            let config = HarnessConfig::load(&path)?;
            println!("Reloaded {}", path.display());
            debug!(?config, "configuration reloaded");
            Ok(EXIT_OK)
        }
    }
}

fn init_config(path: &Path) -> Result<(), AppError> {
    if path.exists() {
        return Err(AppError::Exists(path.to_path_buf()));
    }
    let text = HarnessConfig::default().to_toml()?;
    std::fs::write(path, text).map_err(|source| AppError::Write {
        path: path.to_path_buf(),
        source,
    })
}

async fn open_editor(path: &Path) -> Result<std::process::ExitStatus, AppError> {
    let editor = crate::env::editor();
    // `$EDITOR` may carry arguments, e.g. `code --wait`
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or("vi");

    tokio::process::Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .await
        .map_err(|source| AppError::Editor {
            editor: editor.clone(),
            source,
        })
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
