// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripts file discovery and formats.

use crate::prelude::*;

#[test]
fn found_from_a_subdirectory_and_run_at_the_root() {
    let temp = Project::with_scripts(
        r#"
[scripts]
where = "touch marker"
"#,
    );

    temp.vr_in("src/deep").args(&["where"]).passes();

    assert!(temp.exists("marker"));
    assert!(!temp.exists("src/deep/marker"));
}

#[test]
fn dot_config_file_uses_parent_as_root() {
    let temp = Project::empty();
    temp.file(
        ".config/scripts.toml",
        r#"
[scripts]
where = "touch marker"
"#,
    );

    temp.vr().args(&["where"]).passes();

    assert!(temp.exists("marker"));
    assert!(!temp.exists(".config/marker"));
}

#[test]
fn json_scripts_file() {
    let temp = Project::empty();
    temp.file(
        "scripts.json",
        r#"{ "env": { "WHO": "json" }, "scripts": { "hi": "sh -c 'echo hi-$WHO'" } }"#,
    );

    temp.vr().args(&["hi"]).passes().stdout_has("hi-json");
}

#[test]
fn toml_wins_over_json() {
    let temp = Project::empty();
    temp.file("scripts.toml", "[scripts]\nwhich = \"echo toml\"\n");
    temp.file("scripts.json", r#"{ "scripts": { "which": "echo json" } }"#);

    temp.vr().args(&["which"]).passes().stdout_has("toml").stdout_lacks("json");
}

#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("ci/tasks.toml", "[scripts]\nci = \"echo from-ci\"\n");

    temp.vr().args(&["--config", "ci/tasks.toml", "ci"]).passes().stdout_has("from-ci");
}

#[test]
fn config_from_env() {
    let temp = Project::empty();
    temp.file("ci/tasks.toml", "[scripts]\nci = \"echo from-env\"\n");

    temp.vr().env("VR_CONFIG", "ci/tasks.toml").args(&["ci"]).passes().stdout_has("from-env");
}

#[test]
fn unknown_keys_are_rejected() {
    let temp = Project::with_scripts("[scripts]\nbuild = { cmd = \"true\", run = \"x\" }\n");

    temp.vr().args(&["build"]).exits_with(1).stderr_has("failed to parse");
}
