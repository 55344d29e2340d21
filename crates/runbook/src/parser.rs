// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripts file parsing (TOML and JSON)

use std::path::Path;

use thiserror::Error;

use crate::runbook::Runbook;

/// On-disk format of a scripts file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Format implied by the file extension, if recognised.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Some(Format::Toml),
            Some("json") => Some(Format::Json),
            _ => None,
        }
    }
}

/// Errors from parsing scripts file content.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Parse scripts file content in the given format.
pub fn parse_runbook(content: &str, format: Format) -> Result<Runbook, ParseError> {
    let runbook = match format {
        Format::Toml => toml::from_str(content)?,
        Format::Json => serde_json::from_str(content)?,
    };
    Ok(runbook)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
