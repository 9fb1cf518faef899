// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered, immutable pattern collections.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;

use super::compile::{Compiled, compile_line};
use super::{MatchOptions, Pattern};
use crate::error::{Error, Result};
use crate::normalize::{decode_text, split_lines};

/// A pattern line that was dropped because it did not compile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number within the source.
    pub line: usize,
    /// The trimmed line as written.
    pub text: String,
    pub reason: String,
}

/// Patterns in source order. Later patterns override earlier ones.
///
/// Built once and never mutated, so a set can be shared freely between
/// threads and reused for any number of filter calls.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
    options: MatchOptions,
}

impl PatternSet {
    /// Compile pattern text. Lines that fail to compile are dropped and
    /// logged at `warn` level.
    pub fn parse(text: &str, options: MatchOptions) -> Self {
        Self::from_lines(split_lines(text), options)
    }

    /// Compile pattern text, also returning the dropped lines.
    pub fn parse_with_diagnostics(text: &str, options: MatchOptions) -> (Self, Vec<Diagnostic>) {
        Self::build(split_lines(text), options)
    }

    /// Compile pre-split lines.
    pub fn from_lines<I, S>(lines: I, options: MatchOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (set, diagnostics) = Self::build(lines, options);
        for d in &diagnostics {
            tracing::warn!("dropping pattern on line {}: {:?}: {}", d.line, d.text, d.reason);
        }
        set
    }

    /// Compile pre-split lines, also returning the dropped lines.
    pub fn from_lines_with_diagnostics<I, S>(lines: I, options: MatchOptions) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(lines, options)
    }

    /// Read and compile a whole pattern stream.
    ///
    /// Read failures are returned; content problems never are.
    pub fn from_reader<R: Read>(mut reader: R, options: MatchOptions) -> Result<Self> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| Error::io(None, e))?;
        Ok(Self::parse(&decode_text(&bytes), options))
    }

    /// Read and compile a pattern file.
    pub fn from_path(path: &Path, options: MatchOptions) -> Result<Self> {
        Self::read_path(path).map(|text| Self::parse(&text, options))
    }

    /// Like [`PatternSet::from_path`], also returning the dropped lines.
    pub fn from_path_with_diagnostics(
        path: &Path,
        options: MatchOptions,
    ) -> Result<(Self, Vec<Diagnostic>)> {
        Self::read_path(path).map(|text| Self::parse_with_diagnostics(&text, options))
    }

    fn read_path(path: &Path) -> Result<String> {
        let mut bytes = Vec::new();
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut bytes))
            .map_err(|e| Error::io(Some(path.to_path_buf()), e))?;
        Ok(decode_text(&bytes).into_owned())
    }

    fn build<I, S>(lines: I, options: MatchOptions) -> (Self, Vec<Diagnostic>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        let mut diagnostics = Vec::new();
        for (idx, line) in lines.into_iter().enumerate() {
            match compile_line(line.as_ref(), options) {
                Compiled::Skipped => {}
                Compiled::Pattern(p) => patterns.push(p),
                Compiled::Invalid { text, reason } => {
                    diagnostics.push(Diagnostic { line: idx + 1, text, reason });
                }
            }
        }
        tracing::debug!(
            "compiled {} patterns ({} dropped, case_insensitive={})",
            patterns.len(),
            diagnostics.len(),
            options.case_insensitive
        );
        (Self { patterns, options }, diagnostics)
    }

    /// Join two sets; `other`'s patterns come last and so take precedence.
    /// The options of `self` are kept.
    pub fn chain(mut self, other: PatternSet) -> Self {
        self.patterns.extend(other.patterns);
        self
    }

    /// The options the set was compiled with.
    pub fn options(&self) -> MatchOptions {
        self.options
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}

#[cfg(test)]
#[path = "set_tests.rs"]
mod tests;
