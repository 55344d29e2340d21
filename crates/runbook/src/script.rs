// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Raw script definitions as authored in the scripts file.

use serde::{Deserialize, Deserializer};
use vr_core::Env;

/// One authored script definition, before normalization.
///
/// ```toml
/// [scripts]
/// build = "cargo build"
/// check = ["cargo fmt --check", "cargo clippy"]
/// dev = { pll = ["npm run watch", "cargo watch"], env = { RUST_LOG = "debug" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScriptDef {
    /// A single command line.
    Command(String),
    /// Members run one after another.
    List(Vec<ScriptDef>),
    /// `cmd` or `pll` plus scoped `env` and an optional description.
    Object(ScriptObject),
}

impl ScriptDef {
    /// Description shown in script listings, if the definition has one.
    pub fn description(&self) -> Option<&str> {
        match self {
            ScriptDef::Object(obj) => obj.desc.as_deref(),
            ScriptDef::Command(_) | ScriptDef::List(_) => None,
        }
    }
}

impl From<&str> for ScriptDef {
    fn from(command: &str) -> Self {
        ScriptDef::Command(command.to_string())
    }
}

/// Object form of a script definition. Exactly one of `cmd` / `pll` is
/// expected; the normalizer rejects anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptObject {
    #[serde(default)]
    pub cmd: Option<Box<ScriptDef>>,
    #[serde(default)]
    pub pll: Option<Vec<ScriptDef>>,
    #[serde(default, deserialize_with = "deserialize_env")]
    pub env: Env,
    #[serde(default)]
    pub desc: Option<String>,
}

/// Scalar env value; numbers and booleans are accepted and stringified.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnvValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl EnvValue {
    fn into_string(self) -> String {
        match self {
            EnvValue::String(s) => s,
            EnvValue::Integer(n) => n.to_string(),
            EnvValue::Float(n) => n.to_string(),
            EnvValue::Bool(b) => b.to_string(),
        }
    }
}

/// Deserialize an env table, stringifying scalar values.
pub(crate) fn deserialize_env<'de, D>(deserializer: D) -> Result<Env, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = indexmap::IndexMap::<String, EnvValue>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(|(key, value)| (key, value.into_string())).collect())
}
