// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word splitting for authored command strings.
//!
//! Follows the POSIX word rules that matter for a single simple command:
//! unquoted whitespace separates words, single quotes preserve everything
//! literally, double quotes preserve everything except backslash escapes of
//! `"`, `\`, `$`, `` ` `` and newline, and an unquoted backslash escapes the
//! next character. An unquoted `#` at the start of a word begins a comment
//! that runs to the end of the line.
//!
//! Each [`Word`] carries both its value, with quotes removed and no
//! expansion performed, and the exact source text it was read from.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::error::LexerError;

/// One word of a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    /// The literal value: quotes and escapes removed, nothing expanded.
    pub value: String,
    /// The word exactly as written, quotes included.
    pub source: &'a str,
}

/// Split `input` into literal word values.
pub fn split_words(input: &str) -> Result<Vec<String>, LexerError> {
    let words = Lexer::new(input).words()?;
    Ok(words.into_iter().map(|word| word.value).collect())
}

/// Streaming word splitter over one command string.
pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, chars: input.char_indices().peekable() }
    }

    /// Consume the lexer and collect every word.
    pub fn words(mut self) -> Result<Vec<Word<'a>>, LexerError> {
        let mut words = Vec::new();
        while let Some(word) = self.next_word()? {
            words.push(word);
        }
        Ok(words)
    }

    /// Read the next word, or `None` at end of input.
    pub fn next_word(&mut self) -> Result<Option<Word<'a>>, LexerError> {
        self.skip_blanks_and_comments();
        let Some(&(start, _)) = self.chars.peek() else {
            return Ok(None);
        };

        let mut word = String::new();
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                c if c.is_whitespace() => break,
                '\'' => {
                    self.chars.next();
                    self.lex_single_quote(pos, &mut word)?;
                }
                '"' => {
                    self.chars.next();
                    self.lex_double_quote(pos, &mut word)?;
                }
                '\\' => {
                    self.chars.next();
                    match self.chars.next() {
                        // Line continuation
                        Some((_, '\n')) => {}
                        Some((_, escaped)) => word.push(escaped),
                        None => return Err(LexerError::TrailingBackslash { position: pos }),
                    }
                }
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }

        let end = self.chars.peek().map_or(self.input.len(), |&(pos, _)| pos);
        Ok(Some(Word { value: word, source: &self.input[start..end] }))
    }

    fn skip_blanks_and_comments(&mut self) {
        loop {
            while self.chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}
            if self.chars.next_if(|&(_, c)| c == '#').is_none() {
                return;
            }
            while self.chars.next_if(|&(_, c)| c != '\n').is_some() {}
        }
    }

    fn lex_single_quote(&mut self, start: usize, word: &mut String) -> Result<(), LexerError> {
        for (_, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
        }
        Err(LexerError::UnterminatedSingleQuote { position: start })
    }

    fn lex_double_quote(&mut self, start: usize, word: &mut String) -> Result<(), LexerError> {
        while let Some((_, ch)) = self.chars.next() {
            match ch {
                '"' => return Ok(()),
                '\\' => match self.chars.peek().map(|&(_, c)| c) {
                    Some('"' | '\\' | '$' | '`') => {
                        if let Some((_, escaped)) = self.chars.next() {
                            word.push(escaped);
                        }
                    }
                    Some('\n') => {
                        self.chars.next();
                    }
                    // Backslash is literal before any other character
                    Some(_) => word.push('\\'),
                    None => break,
                },
                _ => word.push(ch),
            }
        }
        Err(LexerError::UnterminatedDoubleQuote { position: start })
    }
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
