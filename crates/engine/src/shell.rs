// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Interpreter used to run each leaf's command line.

use std::fmt;

/// A shell program plus the flags that precede the command string,
/// e.g. `/bin/sh -c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    pub program: String,
    pub args: Vec<String>,
}

impl Shell {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { program: program.into(), args: args.into_iter().map(Into::into).collect() }
    }

    /// `/bin/sh -c`
    pub fn posix() -> Self {
        Self::new("/bin/sh", ["-c"])
    }

    /// Shell for `program`, choosing the command-string flag from its name.
    pub fn from_program(program: &str) -> Self {
        // Either separator, so Windows paths are recognized on any host.
        let base = program.rsplit(['/', '\\']).next().unwrap_or(program).to_ascii_lowercase();
        match base.strip_suffix(".exe").unwrap_or(&base) {
            "cmd" => Self::new(program, ["/d", "/s", "/c"]),
            "powershell" | "pwsh" => Self::new(program, ["-NoProfile", "-Command"]),
            _ => Self::new(program, ["-c"]),
        }
    }

    /// The host's native shell: `cmd.exe` on Windows, `/bin/sh` elsewhere.
    pub fn host_default() -> Self {
        if cfg!(windows) {
            Self::from_program("cmd.exe")
        } else {
            Self::posix()
        }
    }

    /// `program` when given, otherwise the host default.
    pub fn resolve(program: Option<&str>) -> Self {
        match program {
            Some(program) if !program.trim().is_empty() => Self::from_program(program.trim()),
            _ => Self::host_default(),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
