// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-engine: the two consumers of a command tree
//!
//! - [`run`] executes a tree as child processes
//! - [`export`] renders a tree as a standalone POSIX `sh` script

mod error;
pub mod export;
pub mod run;
mod shell;

pub use error::{ExportError, RunError, ScriptError};
pub use export::{
    export, export_scripts, render_file, write_script, ExportReport, ExportedScript,
    DEFAULT_OUT_DIR, VR_MARK,
};
pub use run::{run, run_script};
pub use shell::Shell;
