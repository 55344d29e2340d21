// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr: run project scripts, or export them as standalone `sh` files.

mod color;
mod commands;
mod env;
mod exit_error;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vr_engine::Shell;

use crate::commands::{export::ExportArgs, list::ListArgs, run::RunArgs};

#[derive(Parser, Debug)]
#[command(name = "vr", version, about = "Run and export project scripts")]
#[command(styles = color::styles())]
struct Cli {
    /// Scripts file to use instead of searching upward for one
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Shell used to run each command (default: /bin/sh -c)
    #[arg(long, global = true, value_name = "PROGRAM")]
    shell: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script, forwarding extra arguments to every command
    Run(RunArgs),
    /// Export scripts as executable sh files
    Export(ExportArgs),
    /// List the scripts defined for this project
    List(ListArgs),
    /// Shorthand for `vr run <script> [args]...`
    #[command(external_subcommand)]
    Script(Vec<String>),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();
    let code = exit_error::report(dispatch(cli).await);
    std::process::exit(code);
}

fn init_tracing() {
    let filter = EnvFilter::try_new(env::log_filter()).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot read the current directory")?;
    let config = cli.config.or_else(env::config_path);
    let project = vr_runbook::load_project(config.as_deref(), &cwd)?;
    let shell = Shell::resolve(cli.shell.or_else(env::shell_program).as_deref());
    tracing::debug!(root = %project.root.display(), shell = %shell, "resolved project");

    match cli.command {
        None => commands::list::handle(&project, ListArgs::default()),
        Some(Command::List(args)) => commands::list::handle(&project, args),
        Some(Command::Run(args)) => commands::run::handle(&project, &shell, args).await,
        Some(Command::Script(words)) => {
            let mut words = words.into_iter();
            let args = RunArgs { script: words.next(), args: words.collect() };
            commands::run::handle(&project, &shell, args).await
        }
        Some(Command::Export(args)) => commands::export::handle(&project, args).await,
    }
}
