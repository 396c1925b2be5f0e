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

//! Error types for the fx lexer.
//!
//! Lexical errors describe malformed input and leave the lexer usable; the
//! caller resynchronizes with `skip_until`. Source errors are fatal and end
//! the scanning session.

use std::io;
use thiserror::Error;

/// A position in the input, as reported to diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    /// Human-readable name of the source (usually a file path).
    pub file: String,
    /// Line number (1-indexed).
    pub line: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Error codes for the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E003)
    BadDeclaration,
    BadRune,
    BadIntegerLiteral,

    // Source errors (E100)
    SourceRead,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::BadDeclaration => "E001",
            ErrorCode::BadRune => "E002",
            ErrorCode::BadIntegerLiteral => "E003",
            ErrorCode::SourceRead => "E100",
        }
    }

    /// Fatal errors end the scanning session; no recovery is possible.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ErrorCode::SourceRead)
    }
}

/// A lexer error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct ScanError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The characters consumed while scanning the failed token.
    pub lexeme: String,
    /// Where the lexer stood when the error was detected.
    pub position: Position,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
    /// The underlying I/O failure, for source errors.
    #[source]
    pub cause: Option<io::Error>,
}

impl ScanError {
    /// Create a new lexical error.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        lexeme: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            lexeme: lexeme.into(),
            position,
            hint: None,
            cause: None,
        }
    }

    /// Create a fatal error for a failing character source.
    pub fn source_read(cause: io::Error, position: Position) -> Self {
        Self {
            code: ErrorCode::SourceRead,
            message: format!("cannot read source: {}", cause),
            lexeme: String::new(),
            position,
            hint: None,
            cause: Some(cause),
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Check if this error ends the scanning session.
    pub fn is_fatal(&self) -> bool {
        self.code.is_fatal()
    }
}

/// Result type for lexer operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Format an error with source context.
///
/// When `source` is given, the offending line is quoted below the location.
pub fn format_error(error: &ScanError, source: Option<&str>) -> String {
    let line = error.position.line;
    let line_content = source.and_then(|s| s.lines().nth(line.saturating_sub(1)));

    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
    output.push_str(&format!("  --> {}\n", error.position));

    let line_num_width = line.to_string().len();
    if let Some(content) = line_content {
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!(
            "{:>width$} | {}\n",
            line,
            content,
            width = line_num_width
        ));
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    }

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}
