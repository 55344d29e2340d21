// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use std::path::Path;

use tempfile::TempDir;

/// Env vars that would leak the developer's setup into a spec.
const SCRUBBED_ENV: &[&str] = &["VR_SHELL", "VR_CONFIG", "VR_LOG", "COLOR", "NO_COLOR"];

/// A throwaway project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    /// Project with `scripts.toml` already written.
    pub fn with_scripts(toml: &str) -> Self {
        let project = Self::empty();
        project.file("scripts.toml", toml);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, rel: &str) -> String {
        std::fs::read_to_string(self.path().join(rel))
            .unwrap_or_else(|e| panic!("cannot read {rel}: {e}"))
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.path().join(rel).exists()
    }

    /// `vr` running in the project root.
    pub fn vr(&self) -> CliBuilder {
        CliBuilder::new(self.path())
    }

    /// `vr` running in a subdirectory of the project.
    pub fn vr_in(&self, rel: &str) -> CliBuilder {
        let dir = self.path().join(rel);
        std::fs::create_dir_all(&dir).unwrap();
        CliBuilder::new(&dir)
    }
}

/// `vr` running in an empty temp directory.
pub fn cli() -> CliBuilder {
    let dir = TempDir::new().unwrap();
    let mut builder = CliBuilder::new(dir.path());
    builder.scratch = Some(dir);
    builder
}

pub struct CliBuilder {
    cmd: assert_cmd::Command,
    scratch: Option<TempDir>,
}

impl CliBuilder {
    fn new(cwd: &Path) -> Self {
        let mut cmd = assert_cmd::Command::cargo_bin("vr").unwrap();
        cmd.current_dir(cwd);
        for key in SCRUBBED_ENV {
            cmd.env_remove(key);
        }
        Self { cmd, scratch: None }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    fn output(mut self) -> RunOutput {
        let output = self.cmd.output().unwrap();
        drop(self.scratch.take());
        RunOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn passes(self) -> RunOutput {
        let out = self.output();
        assert_eq!(out.code, Some(0), "expected success\n{out}");
        out
    }

    pub fn exits_with(self, code: i32) -> RunOutput {
        let out = self.output();
        assert_eq!(out.code, Some(code), "unexpected exit code\n{out}");
        out
    }
}

pub struct RunOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl RunOutput {
    pub fn stdout_has(self, needle: &str) -> Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}\n{self}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        assert!(!self.stdout.contains(needle), "stdout unexpectedly has {needle:?}\n{self}");
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}\n{self}");
        self
    }
}

impl std::fmt::Display for RunOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "exit: {:?}\n--- stdout ---\n{}\n--- stderr ---\n{}",
            self.code, self.stdout, self.stderr
        )
    }
}
