// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Engine error types.

use std::path::PathBuf;

use thiserror::Error;
use vr_runbook::{NormalizeError, RunbookError};

/// Failure while executing a command tree.
#[derive(Debug, Error)]
pub enum RunError {
    /// The shell could not be started.
    #[error("failed to spawn `{command}`: {source}")]
    SpawnFailed { command: String, source: std::io::Error },

    /// A leaf exited non-zero. Signal deaths report -1.
    #[error("command `{command}` failed with exit code {exit_code}")]
    CommandFailed { command: String, exit_code: i32 },

    /// One or more members of a parallel group failed. Every member ran to
    /// completion before this was reported.
    #[error("{} of {total} parallel commands failed: {}", .failures.len(), join_errors(.failures))]
    Parallel { total: usize, failures: Vec<RunError> },

    /// A parallel member task panicked or was cancelled by the runtime.
    #[error("parallel task did not complete: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl RunError {
    /// Exit code of the first failing leaf, if any leaf exited non-zero.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            RunError::CommandFailed { exit_code, .. } => Some(*exit_code),
            RunError::Parallel { failures, .. } => failures.iter().find_map(RunError::exit_code),
            RunError::SpawnFailed { .. } | RunError::Join(_) => None,
        }
    }
}

fn join_errors(failures: &[RunError]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Failure running a named script.
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error(transparent)]
    Runbook(#[from] RunbookError),

    #[error("script '{script}': {source}")]
    Normalize { script: String, source: NormalizeError },

    #[error("Failed at the {script} script")]
    Failed {
        script: String,
        #[source]
        source: RunError,
    },
}

/// Failure exporting one script. Sibling exports are unaffected.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Runbook(#[from] RunbookError),

    #[error("script '{script}': {source}")]
    Normalize { script: String, source: NormalizeError },

    #[error("script '{script}': name is not a plain file name")]
    InvalidName { script: String },

    #[error("failed to create {}: {source}", .dir.display())]
    CreateDir { dir: PathBuf, source: std::io::Error },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to back up {} to {}: {source}", .path.display(), .backup.display())]
    Backup { path: PathBuf, backup: PathBuf, source: std::io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: std::io::Error },

    #[error("failed to make {} executable: {source}", .path.display())]
    Permissions { path: PathBuf, source: std::io::Error },

    #[error("export task did not complete: {0}")]
    Join(tokio::task::JoinError),
}
