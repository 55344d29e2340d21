// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tree-walking executor.
//!
//! Leaves are spawned through the configured [`Shell`]. Sequential groups
//! stop at the first failure. Parallel groups start every member at once and
//! always wait for all of them before reporting.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use tokio::task::JoinSet;
use tracing::Instrument;
use vr_core::{Command, Leaf};
use vr_runbook::{normalize, Project};
use vr_shell::build_invocation;

use crate::error::{RunError, ScriptError};
use crate::shell::Shell;

// ---------------------------------------------------------------------------
// Execution context
// ---------------------------------------------------------------------------

/// Read-only state shared by every node of one run.
struct RunContext {
    shell: Shell,
    extra_args: Vec<String>,
    cwd: PathBuf,
}

type RunFuture = Pin<Box<dyn Future<Output = Result<(), RunError>> + Send>>;

/// Execute `tree` in `cwd`, appending `extra_args` to every leaf.
pub async fn run(
    tree: &Command,
    shell: &Shell,
    extra_args: &[String],
    cwd: &Path,
) -> Result<(), RunError> {
    let ctx = Arc::new(RunContext {
        shell: shell.clone(),
        extra_args: extra_args.to_vec(),
        cwd: cwd.to_path_buf(),
    });
    run_node(ctx, tree.clone()).await
}

/// Look up `name`, normalize it against the root env and run it from the
/// project root.
pub async fn run_script(
    project: &Project,
    name: &str,
    shell: &Shell,
    extra_args: &[String],
) -> Result<(), ScriptError> {
    let def = project.runbook.script(name)?;
    let tree = normalize(def, &project.runbook.root_config())
        .map_err(|source| ScriptError::Normalize { script: name.to_string(), source })?;

    tracing::info!(script = name, leaves = tree.leaves().len(), shell = %shell, "running script");
    run(&tree, shell, extra_args, &project.root)
        .await
        .map_err(|source| ScriptError::Failed { script: name.to_string(), source })
}

/// Boxed so that groups can recurse and parallel members can be spawned.
fn run_node(ctx: Arc<RunContext>, node: Command) -> RunFuture {
    Box::pin(async move {
        match node {
            Command::Leaf(leaf) => run_leaf(&ctx, &leaf).await,
            Command::Sequential(members) => {
                for member in members {
                    run_node(Arc::clone(&ctx), member).await?;
                }
                Ok(())
            }
            Command::Parallel(members) => run_parallel(ctx, members).await,
        }
    })
}

// ---------------------------------------------------------------------------
// Parallel groups
// ---------------------------------------------------------------------------

async fn run_parallel(ctx: Arc<RunContext>, members: Vec<Command>) -> Result<(), RunError> {
    let total = members.len();
    let mut set = JoinSet::new();
    for member in members {
        set.spawn(run_node(Arc::clone(&ctx), member));
    }

    // Drain every member; a failure never cancels its siblings.
    let mut failures = Vec::new();
    while let Some(joined) = set.join_next().await {
        match joined {
            Ok(Ok(())) => {}
            Ok(Err(err)) => failures.push(err),
            Err(err) => failures.push(RunError::Join(err)),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        tracing::debug!(total, failed = failures.len(), "parallel group failed");
        Err(RunError::Parallel { total, failures })
    }
}

// ---------------------------------------------------------------------------
// Leaves
// ---------------------------------------------------------------------------

/// Spawn one leaf via `tokio::process::Command`, inheriting stdio.
async fn run_leaf(ctx: &RunContext, leaf: &Leaf) -> Result<(), RunError> {
    let line = build_invocation(leaf, &ctx.extra_args);
    let span = tracing::info_span!(
        "vr.leaf",
        cmd = %line,
        exit_code = tracing::field::Empty,
        duration_ms = tracing::field::Empty,
    );

    async {
        let start = Instant::now();
        let status = tokio::process::Command::new(&ctx.shell.program)
            .args(&ctx.shell.args)
            .arg(&line)
            .current_dir(&ctx.cwd)
            .envs(&leaf.env)
            .status()
            .await
            .map_err(|source| RunError::SpawnFailed { command: line.clone(), source })?;

        // Killed by a signal: no code.
        let exit_code = status.code().unwrap_or(-1);
        let span = tracing::Span::current();
        span.record("exit_code", exit_code);
        span.record("duration_ms", start.elapsed().as_millis() as u64);

        if exit_code == 0 {
            Ok(())
        } else {
            tracing::debug!(exit_code, "leaf failed");
            Err(RunError::CommandFailed { command: leaf.display_name(), exit_code })
        }
    }
    .instrument(span)
    .await
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
