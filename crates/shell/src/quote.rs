// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Double-quote escaping for POSIX `sh`.

/// Characters that change meaning when a word is left unquoted.
///
/// `$`, `*`, `?`, `[`, `~` and `{` are deliberately absent: a bare word keeps
/// variable expansion and globbing the author wrote.
const UNSAFE_UNQUOTED: &[char] =
    &['"', '\'', '\\', '`', ';', '&', '|', '<', '>', '(', ')', '#'];

/// Characters that still need a backslash inside double quotes.
const UNSAFE_IN_DOUBLE_QUOTES: &[char] = &['"', '\\', '`', '$'];

/// True if `word` would be split, reinterpreted or lost when left bare.
pub fn needs_quoting(word: &str) -> bool {
    word.is_empty() || word.chars().any(|c| c.is_whitespace() || UNSAFE_UNQUOTED.contains(&c))
}

/// Render one argument so the shell passes it through as the literal `word`.
///
/// Safe words are returned unchanged. Everything else is wrapped in double
/// quotes with `"`, `\`, `` ` `` and `$` backslash-escaped.
pub fn escape_arg(word: &str) -> String {
    if !needs_quoting(word) {
        return word.to_string();
    }
    format!("\"{}\"", escape_double_quoted(word))
}

/// Backslash-escape `"`, `\`, `` ` `` and `$` for use between double quotes.
pub fn escape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    push_escaped(&mut out, value, UNSAFE_IN_DOUBLE_QUOTES);
    out
}

fn push_escaped(out: &mut String, value: &str, special: &[char]) {
    for ch in value.chars() {
        if special.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
