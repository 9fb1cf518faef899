// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-line pattern compilation.

use regex::Regex;

use super::translate::glob_to_regex;
use super::{MatchOptions, Pattern, PatternKind};
use crate::normalize::normalize_pattern;

/// Outcome of compiling one line of pattern text.
#[derive(Debug)]
pub enum Compiled {
    /// Blank line or `#` comment.
    Skipped,
    Pattern(Pattern),
    /// The translated expression was rejected by the regex engine.
    Invalid {
        /// The trimmed line as written, including any `!`.
        text: String,
        reason: String,
    },
}

/// Compile one line of pattern text.
pub fn compile_line(line: &str, options: MatchOptions) -> Compiled {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Compiled::Skipped;
    }

    let (kind, body) = match trimmed.strip_prefix('!') {
        Some(rest) => (PatternKind::Exclude, rest),
        None => (PatternKind::Include, trimmed),
    };

    let normalized = normalize_pattern(body, options);
    let compiled = glob_to_regex(&normalized);

    match Regex::new(&compiled) {
        Ok(regex) => Compiled::Pattern(Pattern {
            kind,
            regex,
            original: body.to_string(),
            compiled,
        }),
        Err(e) => Compiled::Invalid {
            text: trimmed.to_string(),
            reason: error_summary(&e.to_string()),
        },
    }
}

/// regex errors render as multi-line diagrams; keep the summary line.
fn error_summary(message: &str) -> String {
    message
        .lines()
        .rev()
        .find(|l| l.starts_with("error:"))
        .map(|l| l.trim_start_matches("error:").trim().to_string())
        .unwrap_or_else(|| message.trim().to_string())
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
