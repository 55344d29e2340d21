// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;

/// Shell program override: `VR_SHELL`.
pub fn shell_program() -> Option<String> {
    non_empty("VR_SHELL")
}

/// Scripts file override: `VR_CONFIG`. `--config` takes precedence.
pub fn config_path() -> Option<PathBuf> {
    non_empty("VR_CONFIG").map(PathBuf::from)
}

/// Log filter directives: `VR_LOG` > `warn`.
pub fn log_filter() -> String {
    non_empty("VR_LOG").unwrap_or_else(|| "warn".to_string())
}

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
