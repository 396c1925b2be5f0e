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

//! Number scanning for the lexer.
//!
//! This module handles scanning of integer literals:
//! - Decimal numbers (`45`)
//! - Hexadecimal numbers (`0x` or `0X` prefix)
//!
//! Values are signed 64-bit; anything that does not fit is rejected.

use super::helpers::LexerHelpers;
use super::source::CharSource;
use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::error::{ErrorCode, Result};

/// Trait for number scanning operations.
pub(crate) trait NumberScanner {
    /// Scan an integer literal. The next character must be a decimal digit.
    fn scan_number(&mut self) -> Result<Token>;
}

impl<S: CharSource> NumberScanner for Lexer<S> {
    fn scan_number(&mut self) -> Result<Token> {
        let first = self.get()?;

        let mut hex = false;
        if first == Some('0') {
            if matches!(self.get()?, Some('x' | 'X')) {
                hex = true;
            } else {
                self.unget();
            }
        }

        let is_digit: fn(&char) -> bool = if hex {
            char::is_ascii_hexdigit
        } else {
            char::is_ascii_digit
        };

        while let Some(c) = self.get()? {
            if !is_digit(&c) {
                break;
            }
        }
        self.unget();

        let lexeme = self.accept();
        let parsed = if hex {
            i64::from_str_radix(&lexeme[2..], 16)
        } else {
            lexeme.parse::<i64>()
        };

        match parsed {
            Ok(value) => Ok(Token::new(TokenKind::IntLiteral, lexeme, value)),
            Err(_) => Err(self
                .error(
                    ErrorCode::BadIntegerLiteral,
                    format!("bad integer literal [{}]", lexeme),
                    lexeme,
                )
                .with_hint("integer literals must fit in a signed 64-bit value")),
        }
    }
}
