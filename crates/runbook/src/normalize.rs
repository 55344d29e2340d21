// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of raw script definitions into command trees.
//!
//! - a string becomes a [`Leaf`], split into words with shell quoting rules
//!   and carrying its source text
//! - a list becomes a [`Command::Sequential`] group
//! - an object with `pll` becomes a [`Command::Parallel`] group
//! - an object with `cmd` normalizes its nested definition
//!
//! `env` on an object is merged key by key over the enclosing scope (the
//! runbook's root `env` at the top), and every leaf carries the merged
//! scope it was produced in. Single-member groups are kept as groups.

use std::borrow::Cow;

use vr_core::{Command, Env, Leaf};
use vr_shell::Lexer;

use crate::error::NormalizeError;
use crate::runbook::RootConfig;
use crate::script::{ScriptDef, ScriptObject};

/// Normalize `def` against the runbook's root settings.
pub fn normalize(def: &ScriptDef, root: &RootConfig<'_>) -> Result<Command, NormalizeError> {
    normalize_scoped(def, root.env, "$")
}

fn normalize_scoped(
    def: &ScriptDef,
    scope: &Env,
    location: &str,
) -> Result<Command, NormalizeError> {
    match def {
        ScriptDef::Command(line) => normalize_line(line, scope, location),
        ScriptDef::List(items) => {
            if items.is_empty() {
                return Err(NormalizeError::invalid(location, "empty list"));
            }
            let members = items
                .iter()
                .enumerate()
                .map(|(i, item)| normalize_scoped(item, scope, &format!("{location}[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Sequential(members))
        }
        ScriptDef::Object(obj) => normalize_object(obj, scope, location),
    }
}

fn normalize_object(
    obj: &ScriptObject,
    scope: &Env,
    location: &str,
) -> Result<Command, NormalizeError> {
    let scope = merge_scope(scope, &obj.env);
    match (&obj.cmd, &obj.pll) {
        (Some(cmd), None) => normalize_scoped(cmd, &scope, &format!("{location}.cmd")),
        (None, Some(pll)) => {
            if pll.is_empty() {
                return Err(NormalizeError::invalid(location, "empty `pll` list"));
            }
            let members = pll
                .iter()
                .enumerate()
                .map(|(i, item)| normalize_scoped(item, &scope, &format!("{location}.pll[{i}]")))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Command::Parallel(members))
        }
        (Some(_), Some(_)) => {
            Err(NormalizeError::invalid(location, "object has both `cmd` and `pll`"))
        }
        (None, None) => Err(NormalizeError::invalid(location, "object needs `cmd` or `pll`")),
    }
}

/// A command string becomes one leaf. The words' source text is kept so
/// the author's quoting survives rendering.
fn normalize_line(line: &str, scope: &Env, location: &str) -> Result<Command, NormalizeError> {
    let words = Lexer::new(line)
        .words()
        .map_err(|e| NormalizeError::invalid(location, format!("`{line}`: {e}")))?;
    let source = words.iter().map(|word| word.source).collect::<Vec<_>>().join(" ");
    let mut values = words.into_iter().map(|word| word.value);
    let Some(binary) = values.next() else {
        return Err(NormalizeError::invalid(location, "empty command"));
    };
    Ok(Command::Leaf(Leaf {
        binary,
        args: values.collect(),
        env: scope.clone(),
        source: Some(source),
    }))
}

/// Overlay `inner` on `outer`; inner values win, outer key order is kept.
fn merge_scope<'a>(outer: &'a Env, inner: &Env) -> Cow<'a, Env> {
    if inner.is_empty() {
        return Cow::Borrowed(outer);
    }
    let mut merged = outer.clone();
    for (key, value) in inner {
        merged.insert(key.clone(), value.clone());
    }
    Cow::Owned(merged)
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
