// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render command trees as standalone POSIX `sh` scripts.
//!
//! An exported script gives the same success/failure verdict as running the
//! tree directly:
//!
//! - sequential groups are `&&` chains, so they stop at the first failure
//! - parallel groups background every member, then `wait` on each PID and
//!   exit with the last non-zero status
//! - every leaf forwards the script's own arguments with `"$@"`

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tokio::task::JoinSet;
use vr_core::Command;
use vr_runbook::{normalize, Project};
use vr_shell::build_command_string;

use crate::error::ExportError;

/// Marker written into every generated file. A file without it is treated
/// as hand-written and backed up before being replaced.
pub const VR_MARK: &str = "Generated by vr";

/// Default output directory, relative to the project root.
pub const DEFAULT_OUT_DIR: &str = "bin";

/// Render `tree` as one line of `sh`.
pub fn export(tree: &Command) -> String {
    render(tree, false)
}

fn render(node: &Command, nested: bool) -> String {
    match node {
        Command::Leaf(leaf) => format!("{} \"$@\"", build_command_string(leaf)),
        Command::Sequential(members) => {
            let chain = members.iter().map(|m| render(m, true)).collect::<Vec<_>>().join(" && ");
            if nested && members.len() > 1 {
                format!("( {chain} )")
            } else {
                chain
            }
        }
        Command::Parallel(members) => render_parallel(members),
    }
}

/// `( ( a ) & _vr0=$!; ( b ) & _vr1=$!; _vrs=0; wait $_vr0 || _vrs=$?; ...; exit $_vrs )`
///
/// A bare `wait` always returns 0, so each PID is waited on individually.
/// Variables live in the group's own subshell, so nested groups can reuse
/// the same names.
fn render_parallel(members: &[Command]) -> String {
    let mut parts = Vec::with_capacity(members.len() * 2 + 2);
    for (i, member) in members.iter().enumerate() {
        parts.push(format!("{} & _vr{i}=$!", subshell(member)));
    }
    parts.push("_vrs=0".to_string());
    for i in 0..members.len() {
        parts.push(format!("wait $_vr{i} || _vrs=$?"));
    }
    parts.push("exit $_vrs".to_string());
    format!("( {} )", parts.join("; "))
}

fn subshell(member: &Command) -> String {
    match member {
        // Already a subshell.
        Command::Parallel(_) => render(member, false),
        _ => format!("( {} )", render(member, false)),
    }
}

/// Full file contents: shebang, marker comment and the rendered tree.
pub fn render_file(tree: &Command) -> String {
    format!(
        "#!/bin/sh\n# {VR_MARK}. Do not edit; re-run `vr export` to update.\n\n{}\n",
        export(tree)
    )
}

/// One script written by [`write_script`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedScript {
    pub name: String,
    pub path: PathBuf,
    /// Where a hand-written file at `path` was moved, if there was one.
    pub backup: Option<PathBuf>,
}

/// Outcome of [`export_scripts`]. Each script succeeds or fails on its own.
#[derive(Debug, Default)]
pub struct ExportReport {
    pub exported: Vec<ExportedScript>,
    pub failures: Vec<ExportError>,
}

impl ExportReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write `content` to `dir/name` and mark it executable.
///
/// An existing file that lacks [`VR_MARK`] is first renamed to
/// `<name>.bkp`. Previously generated files are overwritten in place.
/// `name` must be a plain file name; anything that would leave `dir` is
/// rejected.
pub async fn write_script(
    dir: &Path,
    name: &str,
    content: &str,
) -> Result<ExportedScript, ExportError> {
    if !is_plain_file_name(name) {
        return Err(ExportError::InvalidName { script: name.to_string() });
    }
    let path = dir.join(name);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ExportError::CreateDir { dir: dir.to_path_buf(), source })?;

    let mut backup = None;
    let exists = tokio::fs::try_exists(&path)
        .await
        .map_err(|source| ExportError::Read { path: path.clone(), source })?;
    if exists {
        let existing = tokio::fs::read(&path)
            .await
            .map_err(|source| ExportError::Read { path: path.clone(), source })?;
        if !String::from_utf8_lossy(&existing).contains(VR_MARK) {
            let bkp = backup_path(&path);
            tokio::fs::rename(&path, &bkp).await.map_err(|source| ExportError::Backup {
                path: path.clone(),
                backup: bkp.clone(),
                source,
            })?;
            tracing::warn!(
                path = %path.display(),
                backup = %bkp.display(),
                "backed up existing file"
            );
            backup = Some(bkp);
        }
    }

    tokio::fs::write(&path, content)
        .await
        .map_err(|source| ExportError::Write { path: path.clone(), source })?;
    make_executable(&path).await?;

    tracing::debug!(script = name, path = %path.display(), "exported script");
    Ok(ExportedScript { name: name.to_string(), path, backup })
}

/// A single path component that names a file inside its directory.
fn is_plain_file_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".bkp");
    PathBuf::from(name)
}

#[cfg(unix)]
async fn make_executable(path: &Path) -> Result<(), ExportError> {
    use std::os::unix::fs::PermissionsExt;
    tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
        .await
        .map_err(|source| ExportError::Permissions { path: path.to_path_buf(), source })
}

#[cfg(not(unix))]
async fn make_executable(_path: &Path) -> Result<(), ExportError> {
    Ok(())
}

/// Export `names` (every script when empty) into `out_dir`.
///
/// A relative `out_dir` is resolved against the project root. Repeated
/// names are exported once. Scripts are written concurrently and a failure
/// in one never affects the others.
pub async fn export_scripts(project: &Project, names: &[String], out_dir: &Path) -> ExportReport {
    if cfg!(windows) {
        tracing::warn!("exported scripts target POSIX sh only");
    }

    let out_dir = if out_dir.is_absolute() {
        out_dir.to_path_buf()
    } else {
        project.root.join(out_dir)
    };
    // One task per path: two tasks racing on the same file could move the
    // generated copy over the backup of a hand-written one.
    let names: IndexSet<&str> = if names.is_empty() {
        project.runbook.script_names().collect()
    } else {
        names.iter().map(String::as_str).collect()
    };

    let mut report = ExportReport::default();
    let root = project.runbook.root_config();
    let mut set = JoinSet::new();

    for (index, name) in names.into_iter().enumerate() {
        let def = match project.runbook.script(name) {
            Ok(def) => def,
            Err(err) => {
                report.failures.push(err.into());
                continue;
            }
        };
        let tree = match normalize(def, &root) {
            Ok(tree) => tree,
            Err(source) => {
                report.failures.push(ExportError::Normalize { script: name.to_string(), source });
                continue;
            }
        };
        let content = render_file(&tree);
        let dir = out_dir.clone();
        let name = name.to_string();
        set.spawn(async move { (index, write_script(&dir, &name, &content).await) });
    }

    let mut written = Vec::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok((index, Ok(script))) => written.push((index, script)),
            Ok((_, Err(err))) => report.failures.push(err),
            Err(err) => report.failures.push(ExportError::Join(err)),
        }
    }
    written.sort_by_key(|(index, _)| *index);
    report.exported = written.into_iter().map(|(_, script)| script).collect();
    report
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
