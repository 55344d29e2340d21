// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical command tree for one script.
//!
//! Produced by the normalizer, consumed by exactly one engine (run or
//! export), then dropped. Nodes are plain data; consumers branch on the
//! variant with a single `match`.

use indexmap::IndexMap;
use serde::Serialize;

/// Environment overrides attached to a leaf. Keys are unique; order is the
/// order in which scopes were merged, so rendering is deterministic.
pub type Env = IndexMap<String, String>;

/// One node of the command tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    /// A single process invocation.
    Leaf(Leaf),
    /// Ordered chain; stops at the first failing member.
    Sequential(Vec<Command>),
    /// Members run concurrently and are joined; any failure fails the group.
    #[serde(rename = "pll")]
    Parallel(Vec<Command>),
}

impl Command {
    pub fn leaf(binary: impl Into<String>) -> Self {
        Command::Leaf(Leaf::new(binary))
    }

    pub fn sequential(members: impl IntoIterator<Item = Command>) -> Self {
        Command::Sequential(members.into_iter().collect())
    }

    pub fn parallel(members: impl IntoIterator<Item = Command>) -> Self {
        Command::Parallel(members.into_iter().collect())
    }

    pub fn is_parallel(&self) -> bool {
        matches!(self, Command::Parallel(_))
    }

    /// Group members, or an empty slice for a leaf.
    pub fn members(&self) -> &[Command] {
        match self {
            Command::Leaf(_) => &[],
            Command::Sequential(members) | Command::Parallel(members) => members,
        }
    }

    /// All leaves in depth-first order.
    pub fn leaves(&self) -> Vec<&Leaf> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }
}

fn collect_leaves<'a>(node: &'a Command, out: &mut Vec<&'a Leaf>) {
    if let Command::Leaf(leaf) = node {
        out.push(leaf);
    }
    for member in node.members() {
        collect_leaves(member, out);
    }
}

impl From<Leaf> for Command {
    fn from(leaf: Leaf) -> Self {
        Command::Leaf(leaf)
    }
}

/// A single shell invocation: `binary args...` with scoped env overrides.
///
/// `binary` and `args` are the literal words the program receives. A leaf
/// normalized from a command string also keeps the shell text the author
/// wrote for those words in `source`, which is rendered in their place so
/// quoting, redirects and expansions behave as written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Leaf {
    pub binary: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub env: Env,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl Leaf {
    pub fn new(binary: impl Into<String>) -> Self {
        Self { binary: binary.into(), args: Vec::new(), env: Env::new(), source: None }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Shell text for `binary args...`, one space between words.
    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// `binary args...` without env, for log fields and error messages.
    /// Authored source is preferred over the literal words.
    pub fn display_name(&self) -> String {
        if let Some(source) = &self.source {
            source.clone()
        } else if self.args.is_empty() {
            self.binary.clone()
        } else {
            format!("{} {}", self.binary, self.args.join(" "))
        }
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
