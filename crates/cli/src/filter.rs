// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Applying a [`PatternSet`] to candidate paths.
//!
//! Every pattern is tried against every path. The last pattern that
//! matches decides: include patterns keep the path, exclude patterns drop
//! it. A path no pattern matches is dropped.

use rayon::prelude::*;
use serde::Serialize;

use crate::normalize::normalize_path;
use crate::pattern::{MatchOptions, PatternKind, PatternSet};

/// The verdict for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub included: bool,
    /// Index into the set of the last pattern that matched.
    pub pattern: Option<usize>,
}

impl PatternSet {
    /// Decide a single path.
    pub fn decide(&self, path: &str, options: MatchOptions) -> Decision {
        let normalized = normalize_path(path, options);
        let pattern = self.iter().rposition(|p| p.is_match(&normalized));
        let included = pattern.is_some_and(|idx| self.patterns()[idx].kind() == PatternKind::Include);
        Decision { included, pattern }
    }

    /// Whether a single path would be kept.
    pub fn is_included(&self, path: &str, options: MatchOptions) -> bool {
        self.decide(path, options).included
    }

    /// [`filter_paths`] with the options this set was built with.
    pub fn filter<I, S>(&self, paths: I) -> Vec<S>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        filter_paths(paths, self, self.options())
    }
}

/// Keep the paths `set` includes, in input order and unmodified.
pub fn filter_paths<I, S>(paths: I, set: &PatternSet, options: MatchOptions) -> Vec<S>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    paths
        .into_iter()
        .filter(|path| set.is_included(path.as_ref(), options))
        .collect()
}

/// [`filter_paths`] spread over the rayon thread pool. Output order
/// matches the sequential version.
pub fn filter_paths_par<S>(paths: &[S], set: &PatternSet, options: MatchOptions) -> Vec<S>
where
    S: AsRef<str> + Clone + Send + Sync,
{
    paths
        .par_iter()
        .filter(|path| set.is_included(path.as_ref(), options))
        .cloned()
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
