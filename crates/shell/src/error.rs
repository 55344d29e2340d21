// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for word splitting.

use thiserror::Error;

/// Errors that can occur while splitting a command string into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    /// Unterminated single quote.
    #[error("unterminated single quote starting at position {position}")]
    UnterminatedSingleQuote { position: usize },

    /// Unterminated double quote.
    #[error("unterminated double quote starting at position {position}")]
    UnterminatedDoubleQuote { position: usize },

    /// Backslash at end of input with nothing to escape.
    #[error("trailing backslash at position {position}")]
    TrailingBackslash { position: usize },
}

impl LexerError {
    /// Byte offset in the input where the problem starts.
    pub fn position(&self) -> usize {
        match self {
            Self::UnterminatedSingleQuote { position }
            | Self::UnterminatedDoubleQuote { position }
            | Self::TrailingBackslash { position } => *position,
        }
    }
}
