// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runbook and normalization errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;

/// Errors from locating, reading, or querying a scripts file.
#[derive(Debug, Error)]
pub enum RunbookError {
    #[error("no scripts file found in {} or any parent directory", .start.display())]
    NotFound { start: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: ParseError },

    #[error("unsupported scripts file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("script '{name}' not found{}", format_available(.available))]
    ScriptNotFound { name: String, available: Vec<String> },
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!("; available: {}", available.join(", "))
    }
}

/// Errors from turning a raw script definition into a command tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Empty or unsupported definition shape. `location` is a path into the
    /// definition such as `$`, `$[1]` or `$.pll[0]`.
    #[error("invalid script definition at {location}: {reason}")]
    ScriptDefinitionInvalid { location: String, reason: String },
}

impl NormalizeError {
    pub(crate) fn invalid(location: &str, reason: impl Into<String>) -> Self {
        NormalizeError::ScriptDefinitionInvalid {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}
