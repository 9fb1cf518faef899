// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the config that applies to a working directory.

use std::path::{Path, PathBuf};

use super::{Config, defaults, load};
use crate::error::Result;

/// Search `start` and its ancestors for `pathfilter.toml`.
///
/// The search ends at the first directory holding `.git`, so a config
/// outside the repository is never picked up.
pub fn find(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(defaults::CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            tracing::debug!("no config below git root {}", dir.display());
            break;
        }
    }
    None
}

/// Load the config for `start`, or defaults when none is found.
pub fn load_for(start: &Path) -> Result<Config> {
    match find(start) {
        Some(path) => load(&path),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
#[path = "discover_tests.rs"]
mod tests;
