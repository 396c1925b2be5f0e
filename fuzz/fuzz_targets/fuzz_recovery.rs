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


//! Fuzz target for error recovery.
//!
//! Drives `peek_token`, `next_token` and `skip_until` in an order chosen by
//! the fuzzer.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_recovery

#![no_main]

use arbitrary::Arbitrary;
use fxlex::{Lexer, StrSource, TokenKind};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Next,
    Peek,
    SkipUntil(Vec<char>),
    SkipUntilAndLex(Vec<char>),
}

#[derive(Debug, Arbitrary)]
struct Input {
    source: String,
    steps: Vec<Step>,
}

fn sync_kinds(chars: &[char]) -> Vec<TokenKind> {
    chars.iter().filter_map(|&c| TokenKind::from_char(c)).collect()
}

fuzz_target!(|input: Input| {
    let mut lexer = Lexer::new(StrSource::new(&input.source), "fuzz");
    for step in &input.steps {
        let _ = match step {
            Step::Next => lexer.next_token(),
            Step::Peek => lexer.peek_token(),
            Step::SkipUntil(chars) => lexer.skip_until(&sync_kinds(chars)),
            Step::SkipUntilAndLex(chars) => lexer.skip_until_and_lex(&sync_kinds(chars)),
        };
    }
    assert!(lexer.line() <= input.source.matches('\n').count() + 1);
});
