// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Script listing shown by `vr list` and by `vr run` without a script name

use std::fmt::Write;

use crate::runbook::Runbook;

/// Format the available scripts, one per line, with aligned descriptions.
pub fn format_script_list(runbook: &Runbook) -> String {
    let mut out = String::new();
    if runbook.is_empty() {
        out.push_str("No scripts defined.\n");
        return out;
    }

    out.push_str("Available scripts:\n");
    let width = runbook.script_names().map(str::len).max().unwrap_or(0);
    for (name, def) in &runbook.scripts {
        match def.description() {
            Some(desc) if !desc.is_empty() => {
                let _ = writeln!(out, "  {name:<width$}  {desc}");
            }
            _ => {
                let _ = writeln!(out, "  {name}");
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
