// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pathfilter filter` command implementation.

use std::io::{self, BufRead};

use anyhow::Context;
use pathfilter::cli::FilterArgs;
use pathfilter::config::Config;
use pathfilter::error::ExitCode;
use pathfilter::{filter_paths, filter_paths_par};

use crate::report;

/// Above this many candidates, filtering fans out over the thread pool.
const PARALLEL_THRESHOLD: usize = 10_000;

/// Run the `pathfilter filter` command.
pub fn run(args: &FilterArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let loaded = args.patterns.load(config)?;

    let stdin_paths;
    let candidates: Vec<&str> = if args.paths.is_empty() {
        stdin_paths = read_paths(io::stdin().lock()).context("failed to read paths from stdin")?;
        stdin_paths.iter().map(String::as_str).collect()
    } else {
        args.paths.iter().map(String::as_str).collect()
    };

    let included = if candidates.len() >= PARALLEL_THRESHOLD {
        filter_paths_par(&candidates, &loaded.set, loaded.options)
    } else {
        filter_paths(candidates.iter().copied(), &loaded.set, loaded.options)
    };
    tracing::debug!("{} of {} paths included", included.len(), candidates.len());

    report::print_paths(&included, candidates.len(), args.output)?;
    Ok(report::exit_status(included.len(), args.fail_empty))
}

/// One path per line; blank lines are skipped.
fn read_paths(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            paths.push(line);
        }
    }
    Ok(paths)
}
