// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr export`

use crate::prelude::*;

const SCRIPTS: &str = r#"
[scripts]
build = "echo building"
check = ["echo lint", { pll = ["echo unit", "echo docs"] }]
"#;

#[test]
fn exports_all_scripts_to_bin() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr()
        .args(&["export"])
        .passes()
        .stdout_has("Exported build to bin/build")
        .stdout_has("Exported check to bin/check");

    let build = temp.read("bin/build");
    assert!(build.starts_with("#!/bin/sh\n"));
    assert!(build.contains("Generated by vr"));
    assert!(build.ends_with("echo building \"$@\"\n"));
}

#[test]
fn exports_named_scripts_to_out_dir() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr().args(&["export", "-o", "scripts", "check"]).passes();

    assert!(temp.exists("scripts/check"));
    assert!(!temp.exists("scripts/build"));
    assert!(!temp.exists("bin"));
}

#[cfg(unix)]
#[test]
fn exported_file_is_executable_and_runs() {
    use std::os::unix::fs::PermissionsExt;

    let temp = Project::with_scripts(SCRIPTS);
    temp.vr().args(&["export", "check"]).passes();

    let path = temp.path().join("bin/check");
    assert_eq!(std::fs::metadata(&path).unwrap().permissions().mode() & 0o111, 0o111);

    let output = std::process::Command::new(&path).arg("--fast").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("lint --fast"), "{stdout}");
    assert!(stdout.contains("unit --fast"), "{stdout}");
    assert!(stdout.contains("docs --fast"), "{stdout}");
}

#[test]
fn exporting_twice_makes_no_backup() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr().args(&["export", "build"]).passes();
    temp.vr().args(&["export", "build"]).passes().stdout_lacks("Backed up");

    assert!(!temp.exists("bin/build.bkp"));
}

#[test]
fn hand_written_file_is_backed_up() {
    let temp = Project::with_scripts(SCRIPTS);
    temp.file("bin/build", "#!/bin/sh\nmake\n");

    temp.vr().args(&["export", "build"]).passes().stdout_has("Backed up bin/build.bkp");

    assert_eq!(temp.read("bin/build.bkp"), "#!/bin/sh\nmake\n");
    assert!(temp.read("bin/build").contains("Generated by vr"));
}

#[test]
fn unknown_script_does_not_stop_the_others() {
    let temp = Project::with_scripts(SCRIPTS);

    temp.vr()
        .args(&["export", "nope", "build"])
        .exits_with(1)
        .stdout_has("Exported build")
        .stderr_has("script 'nope' not found")
        .stderr_has("1 script failed to export");

    assert!(temp.exists("bin/build"));
}
