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

//! Error recovery for parsers driving the lexer.
//!
//! After a lexical or syntax error the parser discards tokens up to a
//! synchronization token (typically `;`) and resumes from there.

use super::source::CharSource;
use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::error::Result;

impl<S: CharSource> Lexer<S> {
    /// Discard tokens until one whose kind is in `stop` is produced, and
    /// return it. Returns the end-of-input token if no stop kind is found.
    ///
    /// Lexical errors met on the way are skipped like tokens. Only fatal
    /// source errors are returned.
    pub fn skip_until(&mut self, stop: &[TokenKind]) -> Result<Token> {
        loop {
            match self.next_token() {
                Ok(token) if token.is_eof() || stop.contains(&token.kind()) => {
                    return Ok(token);
                }
                Ok(token) => {
                    if self.config.trace_skipped {
                        tracing::debug!(
                            file = %self.file,
                            line = self.line,
                            token = %token,
                            "skipped token"
                        );
                    }
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    if self.config.trace_skipped {
                        tracing::debug!(
                            file = %self.file,
                            line = self.line,
                            error = %e,
                            lexeme = %e.lexeme,
                            "skipped malformed input"
                        );
                    }
                }
            }
        }
    }

    /// Like [`skip_until`](Lexer::skip_until), then lex one more token so
    /// the caller resumes right after the synchronization token.
    pub fn skip_until_and_lex(&mut self, stop: &[TokenKind]) -> Result<Token> {
        self.skip_until(stop)?;
        self.next_token()
    }
}
