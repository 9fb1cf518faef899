// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Config file looked up by discovery.
pub const CONFIG_FILE_NAME: &str = "pathfilter.toml";

/// The only config format version understood.
pub const VERSION: i64 = 1;

/// Walk defaults.
pub mod walk {
    /// Default max directory depth (100).
    pub const MAX_DEPTH: usize = 100;
}
