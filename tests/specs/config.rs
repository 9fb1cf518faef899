// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for config discovery and loading.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Patterns and case folding come from a discovered pathfilter.toml
#[test]
fn discovered_config_supplies_patterns() {
    pathfilter_cmd()
        .args(["filter", "GLOBALSCRIPT.ASC", "Game.agf.bak", "_Debug/acsetup.cfg", "Sprites/a.png"])
        .current_dir(fixture("template"))
        .assert()
        .success()
        .stdout("GLOBALSCRIPT.ASC\nSprites/a.png\n");
}

/// Discovery walks up from subdirectories
#[test]
fn config_found_from_subdirectory() {
    let repo = temp_repo(&[("pathfilter.toml", "version = 1\npatterns = [\"*.txt\"]\n"), ("sub/dir/", "")]);
    pathfilter_cmd()
        .args(["filter", "a.txt", "b.png"])
        .current_dir(repo.path().join("sub/dir"))
        .assert()
        .success()
        .stdout("a.txt\n");
}

/// Command-line patterns replace config patterns
#[test]
fn command_line_patterns_win() {
    let repo = temp_repo(&[("pathfilter.toml", "version = 1\npatterns = [\"*.txt\"]\n")]);
    pathfilter_cmd()
        .args(["filter", "-e", "*.png", "a.txt", "b.png"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("b.png\n");
}

/// `--config` selects an explicit file
#[test]
fn explicit_config_flag() {
    let repo = temp_repo(&[("custom.toml", "version = 1\npatterns = [\"*.png\"]\n")]);
    pathfilter_cmd()
        .args(["filter", "-C", "custom.toml", "a.txt", "b.png"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("b.png\n");
}

/// PATHFILTER_CONFIG is read from the environment
#[test]
fn config_from_environment() {
    let repo = temp_repo(&[("env.toml", "version = 1\npatterns = [\"*.txt\"]\n")]);
    pathfilter_cmd()
        .env("PATHFILTER_CONFIG", repo.path().join("env.toml"))
        .args(["filter", "a.txt", "b.png"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout("a.txt\n");
}

/// Broken config exits with code 2
#[test]
fn invalid_config_exits_2() {
    let repo = temp_repo(&[("pathfilter.toml", "version = \n")]);
    pathfilter_cmd()
        .args(["filter", "a.txt"])
        .current_dir(repo.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}

/// Unknown config versions are rejected
#[test]
fn unsupported_version_exits_2() {
    let repo = temp_repo(&[("pathfilter.toml", "version = 9\n")]);
    pathfilter_cmd()
        .args(["filter", "a.txt"])
        .current_dir(repo.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 9"));
}
