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

//! Character sources feeding the lexer.
//!
//! This module provides:
//! - The [`CharSource`] capability trait (read, push back, at-end)
//! - [`StrSource`] for in-memory text
//! - [`ReaderSource`] for UTF-8 byte streams such as files or stdin

use std::io::{self, BufReader, Read};

/// A stream of code points with one character of push-back.
///
/// `Ok(None)` from [`read_char`](CharSource::read_char) means the input is
/// exhausted. Any `Err` is fatal to the lexer reading from this source.
pub trait CharSource {
    /// Read the next character.
    fn read_char(&mut self) -> io::Result<Option<char>>;

    /// Push back the character returned by the last `read_char`.
    fn unread_char(&mut self, c: char);

    /// Check if the source is known to be exhausted.
    fn is_at_end(&self) -> bool;
}

/// A character source over borrowed text.
#[derive(Debug, Clone)]
pub struct StrSource<'source> {
    text: &'source str,
    position: usize,
}

impl<'source> StrSource<'source> {
    /// Create a source reading `text` from the start.
    pub fn new(text: &'source str) -> Self {
        Self { text, position: 0 }
    }

    /// Current byte offset into the text.
    pub fn position(&self) -> usize {
        self.position
    }
}

impl CharSource for StrSource<'_> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        let c = self.text[self.position..].chars().next();
        if let Some(c) = c {
            self.position += c.len_utf8();
        }
        Ok(c)
    }

    fn unread_char(&mut self, c: char) {
        debug_assert!(self.text[..self.position].ends_with(c));
        self.position -= c.len_utf8();
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.text.len()
    }
}

/// A character source decoding UTF-8 from any reader.
///
/// Once the reader reports end of input it is never read again.
pub struct ReaderSource<R: Read> {
    reader: BufReader<R>,
    pushed_back: Option<char>,
    exhausted: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader in a buffered UTF-8 decoder.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            pushed_back: None,
            exhausted: false,
        }
    }

    /// Read one byte, retrying on interruption.
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

/// Length of the UTF-8 sequence introduced by `first`.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_utf8(detail: impl std::fmt::Display) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("invalid UTF-8 in source: {}", detail),
    )
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn read_char(&mut self) -> io::Result<Option<char>> {
        if let Some(c) = self.pushed_back.take() {
            return Ok(Some(c));
        }
        if self.exhausted {
            return Ok(None);
        }

        let first = match self.next_byte()? {
            Some(b) => b,
            None => {
                self.exhausted = true;
                return Ok(None);
            }
        };

        let width =
            utf8_width(first).ok_or_else(|| invalid_utf8(format!("leading byte {:#04x}", first)))?;
        let mut buf = [first, 0, 0, 0];
        self.reader.read_exact(&mut buf[1..width])?;

        let decoded = std::str::from_utf8(&buf[..width]).map_err(invalid_utf8)?;
        Ok(decoded.chars().next())
    }

    fn unread_char(&mut self, c: char) {
        debug_assert!(self.pushed_back.is_none());
        self.pushed_back = Some(c);
    }

    fn is_at_end(&self) -> bool {
        self.exhausted && self.pushed_back.is_none()
    }
}
