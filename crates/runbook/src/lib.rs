// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-runbook: scripts file loading and normalization into command trees
//!
//! A runbook is the project's scripts file (`scripts.toml` or
//! `scripts.json`). Its raw script definitions are turned into
//! [`vr_core::Command`] trees by [`normalize`].

mod error;
pub mod find;
mod help;
mod normalize;
mod parser;
mod runbook;
mod script;

pub use error::{NormalizeError, RunbookError};
pub use find::{find_runbook_file, load_project, Project, RUNBOOK_FILES};
pub use help::format_script_list;
pub use normalize::normalize;
pub use parser::{parse_runbook, Format, ParseError};
pub use runbook::{RootConfig, Runbook};
pub use script::{ScriptDef, ScriptObject};
