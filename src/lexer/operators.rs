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

//! Operator and punctuation scanning for the lexer.
//!
//! This module handles scanning of:
//! - Single-character punctuation and boolean operators
//! - The declaration operator (`:=`)
//! - Integer operators, combined with one character of look-ahead
//!   into `**`, `>=` and `<=`
//! - Line comments (`//` to end of line)

use super::helpers::LexerHelpers;
use super::source::CharSource;
use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::error::{ErrorCode, Result};

/// Trait for operator scanning operations.
pub(crate) trait OperatorScanner {
    /// Emit the single-character token for an already consumed `c`.
    fn scan_single(&mut self, c: char) -> Token;

    /// Finish a `:=` after its `:` has been consumed.
    fn scan_declaration(&mut self) -> Result<Token>;

    /// Finish an integer operator whose first character `base` has been
    /// consumed. Returns `None` when `base` opened a comment instead.
    fn scan_operator(&mut self, base: char) -> Result<Option<Token>>;

    /// Discard everything up to and including the end of the line.
    fn skip_comment(&mut self) -> Result<()>;
}

impl<S: CharSource> OperatorScanner for Lexer<S> {
    fn scan_single(&mut self, c: char) -> Token {
        let kind = TokenKind::from_char(c)
            .unwrap_or_else(|| unreachable!("{:?} is not a single-character token", c));
        Token::new(kind, self.accept(), 0)
    }

    fn scan_declaration(&mut self) -> Result<Token> {
        if self.follows('=')? {
            return Ok(Token::new(TokenKind::Declaration, self.accept(), 0));
        }

        let lexeme = self.accept();
        Err(self
            .error(
                ErrorCode::BadDeclaration,
                "bad declaration token".to_string(),
                lexeme,
            )
            .with_hint("declarations are written ':='"))
    }

    fn scan_operator(&mut self, base: char) -> Result<Option<Token>> {
        let combined = match base {
            '/' => {
                if self.follows('/')? {
                    self.skip_comment()?;
                    return Ok(None);
                }
                None
            }
            '*' => self.follows('*')?.then_some(TokenKind::Pow),
            '>' => self.follows('=')?.then_some(TokenKind::GreaterEqual),
            '<' => self.follows('=')?.then_some(TokenKind::LessEqual),
            _ => None,
        };

        match combined {
            Some(kind) => Ok(Some(Token::new(kind, self.accept(), 0))),
            None => Ok(Some(self.scan_single(base))),
        }
    }

    fn skip_comment(&mut self) -> Result<()> {
        while let Some(c) = self.get()? {
            if c == '\n' {
                break;
            }
        }
        self.accept();
        Ok(())
    }
}
