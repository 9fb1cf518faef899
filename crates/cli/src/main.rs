// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pathfilter::cli::{Cli, Command};
use pathfilter::config::{self, Config};
use pathfilter::error::ExitCode;

mod cmd_explain;
mod cmd_filter;
mod cmd_walk;
mod report;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(err) => {
            eprintln!("pathfilter: {err:#}");
            exit_code_for(&err).into()
        }
    }
}

/// Logs go to stderr so stdout stays a clean path list.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("PATHFILTER_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli)?;
    match &cli.command {
        Command::Filter(args) => cmd_filter::run(args, &config),
        Command::Walk(args) => cmd_walk::run(args, &config),
        Command::Explain(args) => cmd_explain::run(args, &config),
    }
}

/// Explicit `--config` wins; otherwise discover from the working directory.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        return Ok(config::load(path)?);
    }
    let cwd = std::env::current_dir()?;
    Ok(config::load_for(&cwd)?)
}

/// Library errors are all caller configuration problems.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    if err.downcast_ref::<pathfilter::Error>().is_some() {
        ExitCode::ConfigError
    } else {
        ExitCode::InternalError
    }
}
