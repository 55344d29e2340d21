// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr list`, and bare `vr`.

use crate::prelude::*;

const SCRIPTS: &str = r#"
[scripts]
build = { cmd = "cargo build", desc = "Compile" }
test = "cargo test"
"#;

#[test]
fn list_aligns_descriptions() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr().args(&["list"]).passes().stdout_eq("Available scripts:\n  build  Compile\n  test\n");
}

#[test]
fn bare_vr_lists_scripts() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr().passes().stdout_has("Available scripts:").stdout_has("test");
}

#[test]
fn empty_scripts_file() {
    let temp = Project::with_scripts("");

    temp.vr().args(&["list"]).passes().stdout_has("No scripts defined.");
}

#[test]
fn json_output_includes_tree() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr()
        .args(&["list", "-o", "json"])
        .passes()
        .stdout_has(r#""name": "build""#)
        .stdout_has(r#""description": "Compile""#)
        .stdout_has(r#""binary": "cargo""#);
}
