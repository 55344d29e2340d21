// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render a leaf as one line of shell source.

use vr_core::{Env, Leaf};

use crate::quote::{escape_arg, escape_double_quoted};

/// `KEY="value" ...` assignments, space-joined, without a trailing space.
///
/// Values are literal: `$`, `` ` `` and quotes are escaped, matching what a
/// spawned process sees when the same env is set directly.
pub fn env_prefix(env: &Env) -> String {
    env.iter()
        .map(|(key, value)| format!("{key}=\"{}\"", escape_double_quoted(value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `leaf` as `KEY="v" binary arg...`.
///
/// Env assignments use POSIX inline-assignment semantics, so they apply to
/// this invocation only. Authored source is emitted verbatim; literal words
/// are escaped with [`escape_arg`].
pub fn build_command_string(leaf: &Leaf) -> String {
    if leaf.env.is_empty() {
        command_words(leaf)
    } else {
        format!("{} {}", env_prefix(&leaf.env), command_words(leaf))
    }
}

fn command_words(leaf: &Leaf) -> String {
    if let Some(source) = &leaf.source {
        return source.clone();
    }
    std::iter::once(&leaf.binary)
        .chain(&leaf.args)
        .map(|word| escape_arg(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render `binary arg... extra...` without the env prefix.
///
/// For live execution, where the leaf's env is set on the spawned process
/// instead. Extra arguments come from the command line, not the author, so
/// each one is passed as a literal word: no expansion, globbing or operators.
pub fn build_invocation(leaf: &Leaf, extra_args: &[String]) -> String {
    let mut line = command_words(leaf);
    for arg in extra_args {
        line.push(' ');
        line.push_str(&quote_literal(arg));
    }
    line
}

fn quote_literal(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg.chars().all(|c| c.is_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("\"{}\"", escape_double_quoted(arg))
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
