// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr export`: write scripts out as standalone `sh` files.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use vr_engine::{export_scripts, DEFAULT_OUT_DIR};
use vr_runbook::Project;

use crate::exit_error::ExitError;

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Scripts to export (default: all)
    pub scripts: Vec<String>,
    /// Output directory, relative to the project root
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    pub out_dir: PathBuf,
}

pub async fn handle(project: &Project, args: ExportArgs) -> Result<()> {
    let report = export_scripts(project, &args.scripts, &args.out_dir).await;

    for script in &report.exported {
        if let Some(backup) = &script.backup {
            println!("Backed up {}", display(project, backup));
        }
        println!("Exported {} to {}", script.name, display(project, &script.path));
    }

    if report.is_success() {
        return Ok(());
    }
    for failure in &report.failures {
        eprintln!("error: {failure}");
    }
    let count = report.failures.len();
    let noun = if count == 1 { "script" } else { "scripts" };
    Err(ExitError::new(1, format!("{count} {noun} failed to export")).into())
}

/// `path` relative to the project root when it lives under it.
fn display(project: &Project, path: &Path) -> String {
    path.strip_prefix(&project.root).unwrap_or(path).display().to_string()
}
