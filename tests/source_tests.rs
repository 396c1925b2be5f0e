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


//! Tests for lexing from files and other readers.

use fxlex::{Lexer, LexerConfig, ReaderSource, TokenKind};
use std::io::Write;

#[test]
fn test_open_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(include_bytes!("fixtures/valid/entry.fx"))
        .expect("Failed to write temp file");

    let mut lexer = Lexer::open(file.path()).expect("Failed to open lexer");
    assert_eq!(lexer.file_name(), file.path().display().to_string());
    assert_eq!(lexer.next_token().unwrap().kind(), TokenKind::Func);
    assert_eq!(lexer.line(), 2);

    let count = lexer.by_ref().map(|t| t.unwrap()).count();
    assert_eq!(count, 102);
    assert_eq!(lexer.line(), 22);
    assert!(lexer.is_finished());
}

#[test]
fn test_open_missing_file() {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let result = Lexer::open(temp_dir.path().join("missing.fx"));
    assert!(result.is_err());
}

#[test]
fn test_open_with_config() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    write!(file, "a b ; c").expect("Failed to write temp file");

    let config = LexerConfig::new().with_trace_skipped(true);
    let mut lexer = Lexer::open_with_config(file.path(), config).expect("Failed to open lexer");
    assert!(lexer.config().trace_skipped);

    let next = lexer.skip_until_and_lex(&[TokenKind::Semicolon]).unwrap();
    assert_eq!(next.lexeme(), "c");
}

#[test]
fn test_reader_source_matches_file_tokens() {
    let text = include_str!("fixtures/valid/macros.fx");
    let from_reader: Vec<_> = Lexer::new(ReaderSource::new(text.as_bytes()), "reader")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(from_reader, fxlex::tokenize(text).unwrap());
}

#[test]
fn test_lexer_over_cursor_is_finished_once() {
    let mut lexer = Lexer::new(ReaderSource::new(std::io::Cursor::new("x")), "cursor");
    assert!(!lexer.is_finished());
    lexer.next_token().unwrap();
    assert!(!lexer.is_finished());
    assert!(lexer.next_token().unwrap().is_eof());
    assert!(lexer.is_finished());
}
