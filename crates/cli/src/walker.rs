// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Directory walking to produce candidate path lists.
//!
//! Uses the `ignore` crate so `.gitignore` and hidden-file rules can be
//! honoured before include/exclude patterns are applied.

use std::path::{Component, Path, PathBuf};

use ignore::WalkBuilder;

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,
    /// Skip hidden files and directories.
    pub hidden: bool,
    /// Honour `.gitignore` files (inside a git repository).
    pub git_ignore: bool,
    /// Report directories as well as files.
    pub include_dirs: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self { max_depth: Some(100), hidden: true, git_ignore: true, include_dirs: true }
    }
}

/// A path discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedPath {
    /// Full path on disk.
    pub path: PathBuf,
    /// Path relative to the walk root, `/`-separated.
    pub relative: String,
    pub is_dir: bool,
    /// Depth below the root (1 = direct child).
    pub depth: usize,
}

/// Walk statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    pub dirs_found: usize,
    pub errors: usize,
}

/// File walker.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and collect every entry below it, sorted by relative path.
    ///
    /// Unreadable entries are logged and counted, never fatal.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedPath>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .filter_entry(|entry| entry.file_name() != ".git");

        let mut paths = Vec::new();
        let mut stats = WalkStats::default();

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    stats.errors += 1;
                    continue;
                }
            };
            if entry.depth() == 0 {
                continue;
            }

            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir {
                stats.dirs_found += 1;
                if !self.config.include_dirs {
                    continue;
                }
            } else {
                stats.files_found += 1;
            }

            let Some(relative) = relative_path(root, entry.path()) else {
                continue;
            };
            paths.push(WalkedPath {
                path: entry.path().to_path_buf(),
                relative,
                is_dir,
                depth: entry.depth(),
            });
        }

        paths.sort_by(|a, b| a.relative.cmp(&b.relative));
        tracing::debug!(
            "walked {}: {} files, {} dirs, {} errors",
            root.display(),
            stats.files_found,
            stats.dirs_found,
            stats.errors
        );
        (paths, stats)
    }
}

/// `/`-joined path of `path` below `root`, regardless of platform.
fn relative_path(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<_> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() { None } else { Some(parts.join("/")) }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
