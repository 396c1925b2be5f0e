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

//! Lexer helper methods for character navigation.
//!
//! This module provides the character cursor the scanners are built on:
//! - `get` pulls one character and appends it to the accepted text
//! - `unget` pushes the last character back (once)
//! - `accept` hands out the accepted text as a lexeme

use super::source::CharSource;
use super::Lexer;
use crate::error::{ErrorCode, Position, Result, ScanError};

/// What the cursor did last. Only a consumed character can be pushed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LastRead {
    /// Nothing has been read yet.
    Nothing,
    /// A character was consumed.
    Char(char),
    /// The source reported end of input.
    Eof,
    /// The last character was pushed back.
    Ungot,
}

/// Trait for lexer helper operations.
pub(crate) trait LexerHelpers {
    /// Pull the next character, or `None` at end of input.
    fn get(&mut self) -> Result<Option<char>>;

    /// Push the last consumed character back. No-op after end of input.
    fn unget(&mut self);

    /// Take the accepted characters as a lexeme.
    fn accept(&mut self) -> String;

    /// Consume the next character if it is `expected`.
    fn follows(&mut self, expected: char) -> Result<bool>;

    /// The current diagnostic position.
    fn here(&self) -> Position;

    /// Build a lexical error at the current position.
    fn error(&self, code: ErrorCode, message: String, lexeme: String) -> ScanError;
}

impl<S: CharSource> LexerHelpers for Lexer<S> {
    fn get(&mut self) -> Result<Option<char>> {
        if self.source.is_at_end() {
            self.last = LastRead::Eof;
            return Ok(None);
        }

        match self.source.read_char() {
            Ok(Some(c)) => {
                self.last = LastRead::Char(c);
                if c == '\n' {
                    self.line += 1;
                }
                self.accepted.push(c);
                Ok(Some(c))
            }
            Ok(None) => {
                self.last = LastRead::Eof;
                Ok(None)
            }
            Err(e) => {
                // The session is over; later calls only report end of input.
                self.finished = true;
                Err(ScanError::source_read(e, self.here()))
            }
        }
    }

    fn unget(&mut self) {
        match self.last {
            LastRead::Char(c) => {
                self.source.unread_char(c);
                if c == '\n' {
                    self.line -= 1;
                }
                self.accepted.pop();
                self.last = LastRead::Ungot;
            }
            LastRead::Eof => {}
            LastRead::Nothing | LastRead::Ungot => {
                unreachable!("unget without a character to push back")
            }
        }
    }

    fn accept(&mut self) -> String {
        assert!(
            !self.accepted.is_empty() || self.last == LastRead::Eof,
            "accept called before any character was consumed"
        );
        std::mem::take(&mut self.accepted)
    }

    fn follows(&mut self, expected: char) -> Result<bool> {
        if self.get()? == Some(expected) {
            return Ok(true);
        }
        self.unget();
        Ok(false)
    }

    fn here(&self) -> Position {
        Position::new(self.file.clone(), self.line)
    }

    fn error(&self, code: ErrorCode, message: String, lexeme: String) -> ScanError {
        ScanError::new(code, message, lexeme, self.here())
    }
}
