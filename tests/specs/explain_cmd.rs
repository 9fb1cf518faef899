// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the `pathfilter explain` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// Without paths, each compiled pattern is listed with its regex
#[test]
fn lists_compiled_patterns() {
    let repo = temp_repo(&[]);
    pathfilter_cmd()
        .args(["explain", "-e", "*.asc", "-e", "!ignoreme.asc"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(
            predicates::str::contains(r"include  *.asc  ->  (^|/).*\.asc($|/)")
                .and(predicates::str::contains(r"exclude  !ignoreme.asc  ->  (^|/)ignoreme\.asc($|/)")),
        );
}

/// Dropped lines are listed with their source and line number
#[test]
fn lists_dropped_lines() {
    let repo = temp_repo(&[("rules.files", "*.txt\n\nbad[z-a]\n")]);
    pathfilter_cmd()
        .args(["explain", "-p", "rules.files"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("dropped rules.files:3: bad[z-a]"));
}

/// With paths, the deciding pattern is named
#[test]
fn explains_path_decisions() {
    let repo = temp_repo(&[]);
    pathfilter_cmd()
        .args(["explain", "-e", "*.txt", "-e", "!secret.txt", "a.txt", "secret.txt", "b.png"])
        .current_dir(repo.path())
        .assert()
        .success()
        .stdout(
            "a.txt: included by #0 *.txt\n\
             secret.txt: excluded by #1 !secret.txt\n\
             b.png: excluded (no pattern matched)\n",
        );
}

/// JSON decisions carry the pattern index and rule text
#[test]
fn json_decisions() {
    let repo = temp_repo(&[]);
    let output = pathfilter_cmd()
        .args(["explain", "-o", "json", "-e", "*.txt", "-e", "!secret.txt", "secret.txt", "b.png"])
        .current_dir(repo.path())
        .output()
        .expect("command should run");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    let decisions = json["decisions"].as_array().expect("decisions array");
    assert_eq!(decisions.len(), 2);
    assert_eq!(decisions[0]["path"], "secret.txt");
    assert_eq!(decisions[0]["included"], false);
    assert_eq!(decisions[0]["pattern"], 1);
    assert_eq!(decisions[0]["rule"], "!secret.txt");
    assert!(decisions[1]["pattern"].is_null());
}

/// JSON pattern listing includes kinds and dropped lines
#[test]
fn json_patterns() {
    let repo = temp_repo(&[]);
    let output = pathfilter_cmd()
        .args(["explain", "-o", "json", "-i", "-e", "*.TXT", "-e", "!x[z-a]"])
        .current_dir(repo.path())
        .output()
        .expect("command should run");

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("should be valid JSON");
    assert_eq!(json["case_insensitive"], true);
    assert_eq!(json["patterns"][0]["kind"], "include");
    assert_eq!(json["patterns"][0]["original"], "*.TXT");
    assert_eq!(json["patterns"][0]["compiled"], r"(^|/).*\.txt($|/)");
    assert_eq!(json["dropped"][0]["source"], "<arg>");
    assert_eq!(json["dropped"][0]["line"], 2);
}
