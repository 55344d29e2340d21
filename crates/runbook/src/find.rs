// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripts file discovery

use std::path::{Path, PathBuf};

use crate::error::RunbookError;
use crate::parser::{parse_runbook, Format};
use crate::runbook::Runbook;

/// File names probed in each directory, in priority order.
pub const RUNBOOK_FILES: &[&str] = &[
    "scripts.toml",
    "scripts.json",
    ".config/scripts.toml",
    ".config/scripts.json",
];

/// A loaded scripts file and the project root it belongs to.
#[derive(Debug, Clone)]
pub struct Project {
    /// Directory the scripts run in: the directory holding the file, or its
    /// parent when the file lives under `.config/`.
    pub root: PathBuf,
    /// Path of the scripts file itself.
    pub path: PathBuf,
    pub runbook: Runbook,
}

/// Walk up from `start` and return the first scripts file found.
pub fn find_runbook_file(start: &Path) -> Option<PathBuf> {
    start.ancestors().find_map(|dir| {
        RUNBOOK_FILES.iter().map(|name| dir.join(name)).find(|candidate| candidate.is_file())
    })
}

/// Load the project for `explicit` if given, otherwise discover one from `start`.
pub fn load_project(explicit: Option<&Path>, start: &Path) -> Result<Project, RunbookError> {
    let path = match explicit {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => start.join(path),
        None => find_runbook_file(start)
            .ok_or_else(|| RunbookError::NotFound { start: start.to_path_buf() })?,
    };

    let format = Format::from_path(&path)
        .ok_or_else(|| RunbookError::UnsupportedFormat { path: path.clone() })?;
    let content = std::fs::read_to_string(&path)
        .map_err(|source| RunbookError::Read { path: path.clone(), source })?;
    let runbook = parse_runbook(&content, format)
        .map_err(|source| RunbookError::Parse { path: path.clone(), source })?;

    let root = project_root(&path);
    tracing::debug!(
        path = %path.display(),
        root = %root.display(),
        scripts = runbook.scripts.len(),
        "loaded scripts file"
    );
    Ok(Project { root, path, runbook })
}

fn project_root(path: &Path) -> PathBuf {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    match dir.file_name() {
        Some(name) if name == ".config" => dir.parent().unwrap_or(dir).to_path_buf(),
        _ => dir.to_path_buf(),
    }
}

#[cfg(test)]
#[path = "find_tests.rs"]
mod tests;
