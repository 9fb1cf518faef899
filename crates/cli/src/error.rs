// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types and process exit codes.

use std::path::PathBuf;

/// Errors surfaced by the library.
///
/// Only unreadable input and broken configuration are errors. Malformed
/// pattern lines are dropped during compilation and never reach here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern source or config file could not be read.
    #[error("failed to read {}: {source}", display_path(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML or has the wrong shape.
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// Config file declares a version this build does not understand.
    #[error("unsupported config version {version} in {}", .path.display())]
    UnsupportedVersion { path: PathBuf, version: i64 },
}

impl Error {
    pub fn io(path: Option<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path, source }
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => p.display().to_string(),
        None => "pattern stream".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    /// `--fail-empty` was given and nothing was included.
    NoMatches = 1,
    ConfigError = 2,
    InternalError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
