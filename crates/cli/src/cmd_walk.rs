// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `pathfilter walk` command implementation.
//!
//! Walks a directory and filters the relative paths of everything found,
//! directories included unless `--no-dirs` is given.

use std::io;

use pathfilter::cli::WalkArgs;
use pathfilter::config::Config;
use pathfilter::error::{Error, ExitCode};
use pathfilter::filter_paths_par;
use pathfilter::walker::FileWalker;

use crate::report;

/// Run the `pathfilter walk` command.
pub fn run(args: &WalkArgs, config: &Config) -> anyhow::Result<ExitCode> {
    let loaded = args.patterns.load(config)?;

    let root = if args.root.is_absolute() {
        args.root.clone()
    } else {
        std::env::current_dir()?.join(&args.root)
    };
    if !root.is_dir() {
        return Err(Error::io(
            Some(root),
            io::Error::new(io::ErrorKind::NotFound, "not a directory"),
        )
        .into());
    }

    let mut walker_config = config.walk.to_walker_config();
    if let Some(depth) = args.max_depth {
        walker_config.max_depth = Some(depth);
    }
    if args.no_dirs {
        walker_config.include_dirs = false;
    }
    if args.hidden {
        walker_config.hidden = false;
    }
    if args.no_gitignore {
        walker_config.git_ignore = false;
    }

    let (entries, stats) = FileWalker::new(walker_config).walk_collect(&root);
    if stats.errors > 0 {
        tracing::warn!("{} entries could not be read under {}", stats.errors, root.display());
    }

    let candidates: Vec<&str> = entries.iter().map(|e| e.relative.as_str()).collect();
    let included = filter_paths_par(&candidates, &loaded.set, loaded.options);

    report::print_paths(&included, candidates.len(), args.output)?;
    Ok(report::exit_status(included.len(), args.fail_empty))
}
