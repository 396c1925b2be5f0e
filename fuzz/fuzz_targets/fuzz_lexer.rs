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


//! Fuzz target for the fx lexer.
//!
//! This fuzzer feeds random bytes to the lexer, both as text and through
//! the UTF-8 decoding reader, to find crashes or hangs.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_lexer
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_lexer -- -max_total_time=60

#![no_main]

use fxlex::{Lexer, ReaderSource};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = fxlex::tokenize(source);
    }

    // Every call consumes input, so the scan ends within len + 1 calls.
    let mut lexer = Lexer::new(ReaderSource::new(data), "fuzz");
    for _ in 0..=data.len() {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => return,
            Err(e) if e.is_fatal() => return,
            _ => {}
        }
    }
    panic!("lexer did not reach end of input");
});
