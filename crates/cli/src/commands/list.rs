// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr list`: show the scripts defined for this project.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use vr_core::Command;
use vr_runbook::{format_script_list, normalize, Project, Runbook};

use crate::output::{format_or_json, OutputFormat};

#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value_t)]
    pub output: OutputFormat,
}

/// One script as shown by `vr list -o json`.
#[derive(Debug, Serialize)]
pub(crate) struct ScriptEntry<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Normalized tree, or the reason it is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub(crate) fn entries(runbook: &Runbook) -> Vec<ScriptEntry<'_>> {
    let root = runbook.root_config();
    runbook
        .scripts
        .iter()
        .map(|(name, def)| {
            let (command, error) = match normalize(def, &root) {
                Ok(tree) => (Some(tree), None),
                Err(err) => (None, Some(err.to_string())),
            };
            ScriptEntry { name, description: def.description(), command, error }
        })
        .collect()
}

pub fn handle(project: &Project, args: ListArgs) -> Result<()> {
    let entries = entries(&project.runbook);
    format_or_json(args.output, &entries, || format_script_list(&project.runbook))
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
