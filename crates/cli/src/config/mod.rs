// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pathfilter.toml` configuration.
//!
//! ```toml
//! version = 1
//! case_insensitive = true
//! patterns_file = "template.files"
//! patterns = ["!*.bak"]
//!
//! [walk]
//! max_depth = 100
//! hidden = true
//! git_ignore = true
//! include_dirs = true
//! ```

mod defaults;
mod discover;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::pattern::{Diagnostic, MatchOptions, PatternSet};
use crate::walker::WalkerConfig;

pub use defaults::CONFIG_FILE_NAME;
pub use discover::{find, load_for};

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub version: i64,

    /// Fold case in patterns and paths.
    pub case_insensitive: bool,

    /// Pattern file, relative to the config file's directory.
    pub patterns_file: Option<PathBuf>,

    /// Inline patterns, applied after `patterns_file`.
    pub patterns: Vec<String>,

    pub walk: WalkConfig,

    /// Directory the config was loaded from; relative paths resolve here.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: defaults::VERSION,
            case_insensitive: false,
            patterns_file: None,
            patterns: Vec::new(),
            walk: WalkConfig::default(),
            base_dir: None,
        }
    }
}

/// `[walk]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    pub max_depth: usize,
    pub hidden: bool,
    pub git_ignore: bool,
    pub include_dirs: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            max_depth: defaults::walk::MAX_DEPTH,
            hidden: true,
            git_ignore: true,
            include_dirs: true,
        }
    }
}

impl WalkConfig {
    pub fn to_walker_config(&self) -> WalkerConfig {
        WalkerConfig {
            max_depth: Some(self.max_depth),
            hidden: self.hidden,
            git_ignore: self.git_ignore,
            include_dirs: self.include_dirs,
        }
    }
}

impl Config {
    pub fn match_options(&self) -> MatchOptions {
        MatchOptions::case_insensitive(self.case_insensitive)
    }

    /// `patterns_file` resolved against the config directory.
    pub fn resolved_patterns_file(&self) -> Option<PathBuf> {
        let file = self.patterns_file.as_ref()?;
        Some(match &self.base_dir {
            Some(base) if file.is_relative() => base.join(file),
            _ => file.clone(),
        })
    }

    /// Compile the configured patterns: file lines first, then inline ones.
    ///
    /// Dropped lines come back labelled with the file they came from, or
    /// `<arg>` for inline patterns.
    pub fn pattern_set(
        &self,
        options: MatchOptions,
    ) -> Result<(PatternSet, Vec<(String, Diagnostic)>)> {
        let mut diagnostics = Vec::new();
        let from_file = match self.resolved_patterns_file() {
            Some(path) => {
                let (set, dropped) = PatternSet::from_path_with_diagnostics(&path, options)?;
                let label = path.display().to_string();
                diagnostics.extend(dropped.into_iter().map(|d| (label.clone(), d)));
                set
            }
            None => PatternSet::default(),
        };
        let (inline, dropped) = PatternSet::from_lines_with_diagnostics(&self.patterns, options);
        diagnostics.extend(dropped.into_iter().map(|d| (INLINE_SOURCE.to_string(), d)));
        Ok((from_file.chain(inline), diagnostics))
    }
}

/// Label for diagnostics from inline patterns.
pub const INLINE_SOURCE: &str = "<arg>";

/// Parse config text. `path` is used for error messages and to resolve
/// relative paths.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let mut config: Config = toml::from_str(content).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    if config.version != defaults::VERSION {
        return Err(Error::UnsupportedVersion { path: path.to_path_buf(), version: config.version });
    }

    config.base_dir = path.parent().map(Path::to_path_buf);
    Ok(config)
}

/// Load and parse a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::io(Some(path.to_path_buf()), e))?;
    let config = parse(&content, path)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
