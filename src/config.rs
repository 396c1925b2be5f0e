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

//! Lexer configuration.
//!
//! Options are fixed when a [`Lexer`](crate::lexer::Lexer) is built, so two
//! lexers in the same process never share settings.
//!
//! ```
//! use fxlex::LexerConfig;
//!
//! let config = LexerConfig::new().with_trace_skipped(true);
//! assert!(config.trace_skipped);
//! ```

/// Options controlling lexer diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Report every token discarded by `skip_until` through `tracing`.
    pub trace_skipped: bool,
}

impl LexerConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable reporting of skipped tokens.
    pub fn with_trace_skipped(mut self, enabled: bool) -> Self {
        self.trace_skipped = enabled;
        self
    }
}
