//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing pathfilter CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the pathfilter binary.
///
/// Logging is pinned to `warn` so a developer's environment cannot leak
/// debug output into stderr assertions.
pub fn pathfilter_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("pathfilter"));
    cmd.env("PATHFILTER_LOG", "warn");
    cmd.env_remove("PATHFILTER_CONFIG");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// An isolated project directory: a git root so config discovery stops
/// here, with the given files written into it.
pub fn temp_repo(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(".git")).unwrap();
    write_tree(dir.path(), files);
    dir
}

/// Write (path, content) pairs under `root`; a path ending in `/` is an
/// empty directory.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        if path.ends_with('/') {
            std::fs::create_dir_all(full).unwrap();
            continue;
        }
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}

/// Stdout split into lines.
pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout).lines().map(String::from).collect()
}
