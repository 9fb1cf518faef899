// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Filter path lists with gitignore-style include/exclude patterns.
//!
//! A [`PatternSet`] is compiled once from pattern text (one rule per line,
//! `#` comments, `!` for exclusion) and then applied to any number of
//! candidate path lists with last-match-wins semantics.
//!
//! ```
//! use pathfilter::{MatchOptions, PatternSet, filter_paths};
//!
//! let set = PatternSet::parse("*.txt\n!secret.txt\n", MatchOptions::default());
//! let kept = filter_paths(["a.txt", "secret.txt", "b.png"], &set, MatchOptions::default());
//! assert_eq!(kept, vec!["a.txt"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod pattern;
pub mod walker;

#[cfg(test)]
pub mod test_utils;

pub use error::{Error, Result};
pub use filter::{Decision, filter_paths, filter_paths_par};
pub use pattern::{Diagnostic, MatchOptions, Pattern, PatternKind, PatternSet, glob_to_regex};
