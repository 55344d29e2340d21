// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::{Command, Leaf};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for command trees.
pub mod strategies {
    use crate::{Command, Env, Leaf};
    use proptest::prelude::*;

    pub fn arb_word() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9_.-]{0,8}"
    }

    pub fn arb_env() -> impl Strategy<Value = Env> {
        proptest::collection::vec(("[A-Z][A-Z0-9_]{0,5}", "[ -~]{0,10}"), 0..3)
            .prop_map(|pairs| pairs.into_iter().collect())
    }

    pub fn arb_leaf() -> impl Strategy<Value = Leaf> {
        (arb_word(), proptest::collection::vec(arb_word(), 0..3), arb_env())
            .prop_map(|(binary, args, env)| Leaf { binary, args, env, source: None })
    }

    /// Trees up to four levels deep with non-empty groups.
    pub fn arb_command() -> impl Strategy<Value = Command> {
        arb_leaf().prop_map(Command::Leaf).prop_recursive(4, 24, 4, |inner| {
            prop_oneof![
                proptest::collection::vec(inner.clone(), 1..4).prop_map(Command::Sequential),
                proptest::collection::vec(inner, 1..4).prop_map(Command::Parallel),
            ]
        })
    }
}

// ── Tree factory functions ──────────────────────────────────────────────

/// Leaf for `sh -c`-style snippets: `binary arg...` split on spaces.
pub fn leaf(command: &str) -> Command {
    let mut words = command.split_whitespace();
    let binary = words.next().unwrap_or_default();
    Leaf::new(binary).args(words).into()
}

pub fn seq(members: impl IntoIterator<Item = Command>) -> Command {
    Command::sequential(members)
}

pub fn pll(members: impl IntoIterator<Item = Command>) -> Command {
    Command::parallel(members)
}
