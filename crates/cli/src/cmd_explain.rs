// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pathfilter explain` command implementation.
//!
//! Without paths, lists each compiled pattern and any dropped lines.
//! With paths, shows which pattern decided each one.

use pathfilter::cli::{ExplainArgs, LoadedPatterns, OutputFormat};
use pathfilter::config::Config;
use pathfilter::error::ExitCode;
use pathfilter::{Pattern, PatternKind};
use serde_json::json;

use crate::report;

/// Run the `pathfilter explain` command.
pub fn run(args: &ExplainArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let loaded = args.patterns.load(config)?;
    if args.paths.is_empty() {
        explain_patterns(&loaded, args.output)?;
    } else {
        explain_paths(&loaded, &args.paths, args.output)?;
    }
    Ok(ExitCode::Success)
}

/// Pattern as it would be written in a pattern file.
fn rule_text(pattern: &Pattern) -> String {
    match pattern.kind() {
        PatternKind::Include => pattern.original().to_string(),
        PatternKind::Exclude => format!("!{}", pattern.original()),
    }
}

fn explain_patterns(loaded: &LoadedPatterns, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            let mut lines = Vec::with_capacity(loaded.set.len() + loaded.diagnostics.len());
            for (idx, pattern) in loaded.set.iter().enumerate() {
                let kind = match pattern.kind() {
                    PatternKind::Include => "include",
                    PatternKind::Exclude => "exclude",
                };
                lines.push(format!("{:>3}  {:<7}  {}  ->  {}", idx, kind, rule_text(pattern), pattern.compiled()));
            }
            for (source, d) in &loaded.diagnostics {
                lines.push(format!("dropped {}:{}: {}: {}", source, d.line, d.text, d.reason));
            }
            report::print_lines(lines.iter().map(String::as_str))
        }
        OutputFormat::Json => {
            let patterns: Vec<_> = loaded
                .set
                .iter()
                .enumerate()
                .map(|(idx, p)| {
                    json!({
                        "index": idx,
                        "kind": p.kind(),
                        "original": p.original(),
                        "compiled": p.compiled(),
                    })
                })
                .collect();
            let dropped: Vec<_> = loaded
                .diagnostics
                .iter()
                .map(|(source, d)| {
                    json!({
                        "source": source,
                        "line": d.line,
                        "text": d.text,
                        "reason": d.reason,
                    })
                })
                .collect();
            report::print_json(&json!({
                "case_insensitive": loaded.options.case_insensitive,
                "patterns": patterns,
                "dropped": dropped,
            }))
        }
    }
}

fn explain_paths(loaded: &LoadedPatterns, paths: &[String], format: OutputFormat) -> anyhow::Result<()> {
    let decisions: Vec<_> =
        paths.iter().map(|path| (path, loaded.set.decide(path, loaded.options))).collect();

    match format {
        OutputFormat::Text => {
            let lines: Vec<String> = decisions
                .iter()
                .map(|(path, decision)| match decision.pattern {
                    Some(idx) => {
                        let verdict = if decision.included { "included" } else { "excluded" };
                        let rule = rule_text(&loaded.set.patterns()[idx]);
                        format!("{}: {} by #{} {}", path, verdict, idx, rule)
                    }
                    None => format!("{}: excluded (no pattern matched)", path),
                })
                .collect();
            report::print_lines(lines.iter().map(String::as_str))
        }
        OutputFormat::Json => {
            let entries: Vec<_> = decisions
                .iter()
                .map(|(path, decision)| {
                    let rule = decision.pattern.map(|idx| rule_text(&loaded.set.patterns()[idx]));
                    json!({
                        "path": path,
                        "included": decision.included,
                        "pattern": decision.pattern,
                        "rule": rule,
                    })
                })
                .collect();
            report::print_json(&json!({ "decisions": entries }))
        }
    }
}
