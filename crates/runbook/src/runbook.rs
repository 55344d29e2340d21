// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed scripts file.

use indexmap::IndexMap;
use serde::Deserialize;
use vr_core::Env;

use crate::error::RunbookError;
use crate::script::{deserialize_env, ScriptDef};

/// Contents of a scripts file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Runbook {
    /// Environment applied to every leaf of every script.
    #[serde(default, deserialize_with = "deserialize_env")]
    pub env: Env,
    /// Script definitions by name, in file order.
    #[serde(default)]
    pub scripts: IndexMap<String, ScriptDef>,
}

/// Read-only view of the runbook fields other than `scripts`.
///
/// Normalization only ever borrows this, so several scripts can be
/// normalized concurrently from one runbook.
#[derive(Debug, Clone, Copy)]
pub struct RootConfig<'a> {
    pub env: &'a Env,
}

impl Runbook {
    pub fn root_config(&self) -> RootConfig<'_> {
        RootConfig { env: &self.env }
    }

    /// Look up a script by name.
    pub fn script(&self, name: &str) -> Result<&ScriptDef, RunbookError> {
        self.scripts.get(name).ok_or_else(|| RunbookError::ScriptNotFound {
            name: name.to_string(),
            available: self.scripts.keys().cloned().collect(),
        })
    }

    pub fn script_names(&self) -> impl Iterator<Item = &str> {
        self.scripts.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }
}

#[cfg(test)]
#[path = "runbook_tests.rs"]
mod tests;
