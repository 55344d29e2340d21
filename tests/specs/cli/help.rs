// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Help and version output.

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("export");
}

#[test]
fn run_help_shows_usage() {
    cli().args(&["run", "--help"]).passes().stdout_has("Usage:").stdout_has("[ARGS]...");
}

#[test]
fn export_help_shows_out_dir() {
    cli().args(&["export", "--help"]).passes().stdout_has("--out-dir");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}

#[test]
fn no_scripts_file_is_an_error() {
    cli().exits_with(1).stderr_has("no scripts file found");
}
