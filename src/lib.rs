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

//! fxlex Library
//!
//! This library provides the lexical scanner for fx, a small language for
//! drawing macros with records, functions and `iter`/`if`/`else` control
//! flow. It turns characters into typed tokens for a downstream parser.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`config`] - Lexer options
//! - [`lexer`] - Tokenization of source code
//!
//! # Example
//!
//! ```
//! use fxlex::{Lexer, StrSource, TokenKind};
//!
//! let mut lexer = Lexer::new(StrSource::new("iter (i := 0, 3, 1){"), "example.fx");
//!
//! assert_eq!(lexer.next_token()?.kind(), TokenKind::Keyword);
//! assert_eq!(lexer.peek_token()?.kind(), TokenKind::LeftParen);
//! assert_eq!(lexer.next_token()?.kind(), '(');
//!
//! // Resume after the next comma.
//! let next = lexer.skip_until_and_lex(&[TokenKind::Comma])?;
//! assert_eq!(next.value(), 3);
//! # Ok::<(), fxlex::ScanError>(())
//! ```

pub mod config;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use config::LexerConfig;
pub use error::{format_error, ErrorCode, Position, Result, ScanError};
pub use lexer::{tokenize, CharSource, Lexer, ReaderSource, StrSource, Token, TokenKind};

/// The version of fxlex.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the tool.
pub const NAME: &str = "fxlex";
