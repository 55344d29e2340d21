// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr run` and the `vr <script>` shorthand.

use crate::prelude::*;

#[test]
fn runs_a_string_script() {
    let temp = Project::with_scripts(
        r#"
[scripts]
hello = "echo hello-from-vr"
"#,
    );

    temp.vr().args(&["run", "hello"]).passes().stdout_has("hello-from-vr");
}

#[test]
fn shorthand_runs_script() {
    let temp = Project::with_scripts(
        r#"
[scripts]
hello = "echo shorthand"
"#,
    );

    temp.vr().args(&["hello"]).passes().stdout_has("shorthand");
}

#[test]
fn extra_args_are_forwarded_to_every_command() {
    let temp = Project::with_scripts(
        r#"
[scripts]
greet = ["echo first", "echo second"]
"#,
    );

    temp.vr()
        .args(&["run", "greet", "--loud", "two words"])
        .passes()
        .stdout_has("first --loud two words")
        .stdout_has("second --loud two words");
}

#[test]
fn extra_args_are_not_interpreted_by_the_shell() {
    let temp = Project::with_scripts(
        r#"
[scripts]
say = "echo"
"#,
    );

    temp.vr().args(&["say", "$HOME; touch pwned"]).passes().stdout_has("$HOME; touch pwned");
    assert!(!temp.exists("pwned"));
}

#[test]
fn failing_script_exits_3_with_message() {
    let temp = Project::with_scripts(
        r#"
[scripts]
broken = ["touch started", "false", "touch finished"]
"#,
    );

    temp.vr().args(&["run", "broken"]).exits_with(3).stderr_has("Failed at the broken script");
    assert!(temp.exists("started"));
    assert!(!temp.exists("finished"));
}

#[test]
fn parallel_failure_lets_siblings_finish() {
    let temp = Project::with_scripts(
        r#"
[scripts]
both = { pll = ["false", "sh -c 'sleep 0.2; touch sibling'"] }
"#,
    );

    temp.vr().args(&["both"]).exits_with(3);
    assert!(temp.exists("sibling"));
}

#[test]
fn env_is_applied_and_scoped() {
    let temp = Project::with_scripts(
        r#"
[env]
STAGE = "root"

[scripts.show]
pll = [
  { cmd = "sh -c 'echo inner=$STAGE'", env = { STAGE = "inner" } },
  "sh -c 'echo outer=$STAGE'",
]
"#,
    );

    temp.vr().args(&["show"]).passes().stdout_has("inner=inner").stdout_has("outer=root");
}

#[test]
fn unknown_script_lists_available() {
    let temp = Project::with_scripts(
        r#"
[scripts]
build = "true"
test = "true"
"#,
    );

    temp.vr()
        .args(&["run", "deploy"])
        .exits_with(1)
        .stderr_has("script 'deploy' not found")
        .stderr_has("available: build, test");
}

#[test]
fn invalid_definition_runs_nothing() {
    let temp = Project::with_scripts(
        r#"
[scripts]
bad = ["touch ran", { pll = [] }]
"#,
    );

    temp.vr().args(&["bad"]).exits_with(1).stderr_has("empty `pll` list");
    assert!(!temp.exists("ran"));
}

#[test]
fn run_without_script_lists_scripts() {
    let temp = Project::with_scripts(
        r#"
[scripts]
build = { cmd = "cargo build", desc = "Compile everything" }
"#,
    );

    temp.vr().args(&["run"]).passes().stdout_has("build").stdout_has("Compile everything");
}

#[test]
fn shell_override_from_env() {
    let temp = Project::with_scripts(
        r#"
[scripts]
hello = "echo via-override"
"#,
    );

    temp.vr().env("VR_SHELL", "sh").args(&["hello"]).passes().stdout_has("via-override");
}

#[test]
fn missing_shell_is_reported() {
    let temp = Project::with_scripts(
        r#"
[scripts]
hello = "echo never"
"#,
    );

    temp.vr()
        .args(&["--shell", "/nonexistent/shell", "hello"])
        .exits_with(3)
        .stderr_has("Failed at the hello script")
        .stdout_lacks("never");
}
