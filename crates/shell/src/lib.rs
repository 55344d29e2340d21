// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vr-shell: word splitting, quoting, and command-string rendering for POSIX `sh`.
//!
//! - [`Lexer`] / [`split_words`] turn an authored command string into words.
//! - [`escape_arg`] / [`escape_double_quoted`] quote values for the shell.
//! - [`build_command_string`] renders one [`vr_core::Leaf`] as a single line.

mod error;
mod lexer;
mod quote;
mod render;

pub use error::LexerError;
pub use lexer::{split_words, Lexer, Word};
pub use quote::{escape_arg, escape_double_quoted, needs_quoting};
pub use render::{build_command_string, build_invocation, env_prefix};
