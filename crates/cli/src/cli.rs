// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::pattern::{Diagnostic, MatchOptions, PatternSet};

/// Filter path lists with gitignore-style include/exclude patterns
#[derive(Parser)]
#[command(name = "pathfilter")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PATHFILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Filter paths given as arguments or on stdin
    Filter(FilterArgs),
    /// Walk a directory and print the paths the patterns include
    Walk(WalkArgs),
    /// Show compiled patterns, or which pattern decides each path
    Explain(ExplainArgs),
}

/// Where patterns come from. When neither option is given, patterns are
/// taken from the config file.
#[derive(clap::Args, Clone, Default)]
pub struct PatternArgs {
    /// Read patterns from FILE
    #[arg(short = 'p', long = "patterns", value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Add a pattern (repeatable, applied after FILE)
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN", allow_hyphen_values = true)]
    pub patterns: Vec<String>,

    /// Ignore letter case in patterns and paths
    #[arg(short = 'i', long, conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Match letter case exactly, even if the config folds it
    #[arg(long)]
    pub case_sensitive: bool,
}

/// A compiled pattern set and how it was built.
#[derive(Debug)]
pub struct LoadedPatterns {
    pub set: PatternSet,
    pub options: MatchOptions,
    /// Dropped lines, labelled with the file or `<arg>` they came from.
    pub diagnostics: Vec<(String, Diagnostic)>,
}

impl PatternArgs {
    fn has_patterns(&self) -> bool {
        self.patterns_file.is_some() || !self.patterns.is_empty()
    }

    pub fn match_options(&self, config: &Config) -> MatchOptions {
        if self.ignore_case {
            MatchOptions::CASE_INSENSITIVE
        } else if self.case_sensitive {
            MatchOptions::CASE_SENSITIVE
        } else {
            config.match_options()
        }
    }

    /// Compile patterns from the command line, falling back to `config`.
    pub fn load(&self, config: &Config) -> Result<LoadedPatterns> {
        let options = self.match_options(config);
        let (set, diagnostics) = if self.has_patterns() {
            let sources = Config {
                patterns_file: self.patterns_file.clone(),
                patterns: self.patterns.clone(),
                base_dir: None,
                ..Config::default()
            };
            sources.pattern_set(options)?
        } else {
            config.pattern_set(options)?
        };

        for (source, d) in &diagnostics {
            tracing::warn!("{}:{}: dropping pattern {:?}: {}", source, d.line, d.text, d.reason);
        }

        Ok(LoadedPatterns { set, options, diagnostics })
    }
}

#[derive(clap::Args)]
pub struct FilterArgs {
    /// Paths to filter (read from stdin, one per line, when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Exit with code 1 when no path is included
    #[arg(long)]
    pub fail_empty: bool,
}

#[derive(clap::Args)]
pub struct WalkArgs {
    /// Directory to walk
    #[arg(value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Exit with code 1 when no path is included
    #[arg(long)]
    pub fail_empty: bool,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Only report files, not directories
    #[arg(long)]
    pub no_dirs: bool,

    /// Walk hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not honour .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,
}

#[derive(clap::Args)]
pub struct ExplainArgs {
    /// Paths to explain (lists the compiled patterns when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub patterns: PatternArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
