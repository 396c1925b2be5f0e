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

//! Identifier and keyword scanning for the lexer.

use super::helpers::LexerHelpers;
use super::source::CharSource;
use super::tokens::Token;
use super::Lexer;
use crate::error::Result;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Check if a character is a letter (general category L*).
fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Check if a character can start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    is_letter(c)
}

/// Check if a character can continue an identifier: a letter, a decimal
/// digit (general category Nd) or `_`.
pub fn is_identifier_continue(c: char) -> bool {
    c == '_' || is_letter(c) || matches!(get_general_category(c), GeneralCategory::DecimalNumber)
}

/// Trait for identifier scanning operations.
pub(crate) trait IdentifierScanner {
    /// Scan an identifier or keyword. The next character must be a letter.
    fn scan_identifier(&mut self) -> Result<Token>;
}

impl<S: CharSource> IdentifierScanner for Lexer<S> {
    fn scan_identifier(&mut self) -> Result<Token> {
        self.get()?;
        while let Some(c) = self.get()? {
            if !is_identifier_continue(c) {
                break;
            }
        }
        self.unget();

        Ok(Token::from_keyword_or_identifier(self.accept()))
    }
}
