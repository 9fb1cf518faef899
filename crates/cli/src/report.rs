// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Path list output in text or JSON.

use std::io::{self, Write};

use pathfilter::cli::OutputFormat;
use pathfilter::error::ExitCode;
use serde_json::json;

/// Print included paths. `total` is the number of candidates considered.
pub fn print_paths(included: &[&str], total: usize, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print_lines(included.iter().copied()),
        OutputFormat::Json => print_json(&json!({
            "included": included,
            "count": included.len(),
            "total": total,
        })),
    }
}

pub fn print_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

/// `NoMatches` only when asked for and nothing was included.
pub fn exit_status(included: usize, fail_empty: bool) -> ExitCode {
    if fail_empty && included == 0 { ExitCode::NoMatches } else { ExitCode::Success }
}
