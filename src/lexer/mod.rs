// fxlex - A lexical scanner for the fx drawing-macro language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Lexer module for the fx language.
//!
//! This module turns a stream of characters into tokens, one at a time.
//! It handles:
//! - Keywords, identifiers and boolean literals (`True`, `False`)
//! - Integer literals (decimal, hex with `0x`)
//! - Operators and punctuation, including `:=`, `**`, `>=` and `<=`
//! - Comments (starting with `//`)
//! - One token of look-ahead (`peek_token`)
//! - Resynchronization after errors (`skip_until`)
//!
//! The parser pulls tokens with [`Lexer::next_token`]; end of input is an
//! ordinary token of kind [`TokenKind::Eof`] and is reported on every call
//! once reached.

mod helpers;
mod identifiers;
mod numbers;
mod operators;
mod recovery;
mod source;
mod tokens;

pub use identifiers::{is_identifier_continue, is_identifier_start};
pub use source::{CharSource, ReaderSource, StrSource};
pub use tokens::{Token, TokenKind, KEYWORDS, RUNE_EOF};

use std::fs::File;
use std::io;
use std::path::Path;

use crate::config::LexerConfig;
use crate::error::{ErrorCode, Result};
use helpers::{LastRead, LexerHelpers};
use identifiers::IdentifierScanner;
use numbers::NumberScanner;
use operators::OperatorScanner;

/// The lexer state for tokenizing one character source.
pub struct Lexer<S: CharSource> {
    /// Where characters come from. Owned for the lexer's lifetime.
    source: S,
    /// Name of the source, for diagnostics.
    file: String,
    /// Current line number (1-indexed).
    line: usize,
    /// The cursor's last action, deciding whether `unget` may push back.
    last: LastRead,
    /// Characters consumed since the last `accept`.
    accepted: String,
    /// Token saved by `peek_token`.
    saved: Option<Token>,
    /// Whether end of input has been reported.
    finished: bool,
    config: LexerConfig,
}

impl<S: CharSource> Lexer<S> {
    /// Create a new lexer reading from `source` with default options.
    pub fn new(source: S, file: impl Into<String>) -> Self {
        Self::with_config(source, file, LexerConfig::default())
    }

    /// Create a new lexer with explicit options.
    pub fn with_config(source: S, file: impl Into<String>, config: LexerConfig) -> Self {
        Self {
            source,
            file: file.into(),
            line: 1,
            last: LastRead::Nothing,
            accepted: String::new(),
            saved: None,
            finished: false,
            config,
        }
    }

    /// Name of the source being read.
    pub fn file_name(&self) -> &str {
        &self.file
    }

    /// Current line number, counted after the most recently returned token.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Options this lexer was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Check if end of input has been reported.
    pub fn is_finished(&self) -> bool {
        self.finished && self.saved.is_none()
    }

    /// Get the next token from the source.
    ///
    /// Lexical errors are returned once; the lexer stays usable and the
    /// caller is expected to resynchronize with [`skip_until`](Lexer::skip_until).
    pub fn next_token(&mut self) -> Result<Token> {
        if let Some(token) = self.saved.take() {
            return Ok(token);
        }
        if self.finished {
            return Ok(Token::eof());
        }

        loop {
            let Some(c) = self.get()? else {
                self.accept();
                self.finished = true;
                return Ok(Token::eof());
            };

            if c.is_whitespace() {
                self.accept();
                continue;
            }

            let token = match c {
                ':' => self.scan_declaration()?,
                '(' | ')' | '{' | '}' | '[' | ']' | ',' | '.' | ';' | '=' => self.scan_single(c),
                '+' | '-' | '*' | '/' | '%' | '>' | '<' => match self.scan_operator(c)? {
                    Some(token) => token,
                    None => continue,
                },
                '|' | '&' | '!' | '^' => self.scan_single(c),
                c if c.is_ascii_digit() => {
                    self.unget();
                    self.scan_number()?
                }
                c if is_identifier_start(c) => {
                    self.unget();
                    self.scan_identifier()?
                }
                c => {
                    let lexeme = self.accept();
                    return Err(self.error(
                        ErrorCode::BadRune,
                        format!("bad rune {}: {:x}", c, c as u32),
                        lexeme,
                    ));
                }
            };

            tracing::trace!(file = %self.file, line = self.line, token = %token, "lexed");
            return Ok(token);
        }
    }

    /// Look at the next token without consuming it.
    ///
    /// Repeated calls return the same token until `next_token` is called.
    /// A failed scan is returned as an error and nothing is saved.
    pub fn peek_token(&mut self) -> Result<Token> {
        if let Some(token) = &self.saved {
            return Ok(token.clone());
        }
        let token = self.next_token()?;
        self.saved = Some(token.clone());
        Ok(token)
    }
}

impl Lexer<ReaderSource<File>> {
    /// Open a file and lex it, labelling diagnostics with its path.
    ///
    /// The file is closed when the lexer is dropped.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Self::open_with_config(path, LexerConfig::default())
    }

    /// Open a file with explicit options.
    pub fn open_with_config(path: impl AsRef<Path>, config: LexerConfig) -> io::Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::with_config(
            ReaderSource::new(file),
            path.display().to_string(),
            config,
        ))
    }
}

impl<S: CharSource> Iterator for Lexer<S> {
    type Item = Result<Token>;

    /// Yields tokens up to, not including, end of input.
    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

/// Tokenize source code into a vector of tokens.
///
/// The end-of-input token is not included. Stops at the first error.
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Lexer::new(StrSource::new(source), "<input>").collect()
}
