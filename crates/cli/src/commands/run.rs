// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `vr run`: run a script from the scripts file.

use anyhow::Result;
use clap::Args;
use vr_engine::{run_script, ScriptError, Shell};
use vr_runbook::{format_script_list, Project};

use crate::exit_error::{ExitError, SCRIPT_FAILED};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script to run (lists scripts when omitted)
    pub script: Option<String>,
    /// Arguments appended to every command in the script
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

pub async fn handle(project: &Project, shell: &Shell, args: RunArgs) -> Result<()> {
    let Some(script) = args.script else {
        print!("{}", format_script_list(&project.runbook));
        return Ok(());
    };

    match run_script(project, &script, shell, &args.args).await {
        Ok(()) => Ok(()),
        Err(err @ ScriptError::Failed { .. }) => {
            if let Some(cause) = std::error::Error::source(&err) {
                tracing::info!(script = %script, error = %cause, "script failed");
            }
            Err(ExitError::new(SCRIPT_FAILED, err.to_string()).into())
        }
        Err(err) => Err(err.into()),
    }
}
