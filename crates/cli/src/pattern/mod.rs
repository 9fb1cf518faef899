// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Include/exclude pattern compilation.
//!
//! Pattern text follows `.gitignore` closely, with one deliberate
//! simplification: `*` matches any run of characters *including* `/`.
//!
//! - `compile`: one line of pattern text to a [`Pattern`]
//! - `translate`: glob syntax to regex syntax
//! - `set`: ordered [`PatternSet`] built from a whole pattern source

mod compile;
mod set;
mod translate;

pub use compile::{Compiled, compile_line};
pub use set::{Diagnostic, PatternSet};
pub use translate::glob_to_regex;

use regex::Regex;
use serde::Serialize;

/// Whether a matching pattern keeps or drops a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    Include,
    /// Written with a leading `!`.
    Exclude,
}

/// Options controlling how pattern text and candidate paths are compared.
///
/// The same options should be used to build a [`PatternSet`] and to filter
/// with it; mixing them is allowed but rarely what you want.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Lower-case pattern text and candidate paths before matching.
    pub case_insensitive: bool,
}

impl MatchOptions {
    pub const CASE_SENSITIVE: Self = Self { case_insensitive: false };
    pub const CASE_INSENSITIVE: Self = Self { case_insensitive: true };

    pub fn case_insensitive(case_insensitive: bool) -> Self {
        Self { case_insensitive }
    }
}

/// A single compiled include or exclude rule.
#[derive(Debug, Clone)]
pub struct Pattern {
    kind: PatternKind,
    regex: Regex,
    original: String,
    compiled: String,
}

impl Pattern {
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// The trimmed source text without the `!` prefix, as written (before
    /// case folding and separator normalization).
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The regex source the matcher was built from.
    pub fn compiled(&self) -> &str {
        &self.compiled
    }

    /// Test an already-normalized path. Matches anywhere in the path,
    /// subject to the segment anchors baked into the expression.
    pub fn is_match(&self, normalized_path: &str) -> bool {
        self.regex.is_match(normalized_path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
