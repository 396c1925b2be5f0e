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


//! Negative/Error tests for the fx lexer.
//!
//! These tests verify that malformed input is rejected with the right error
//! code, message and lexeme, and that the lexer stays usable afterwards.

use fxlex::{format_error, tokenize, ErrorCode, Lexer, StrSource, TokenKind};
use test_case::test_case;

fn lexer(text: &str) -> Lexer<StrSource<'_>> {
    Lexer::new(StrSource::new(text), "bad.fx")
}

// ============================================================================
// Bad Rune Tests
// ============================================================================

/// Characters that start no token are rejected one at a time.
#[test_case("@", "bad rune @: 40"; "at_sign")]
#[test_case("#", "bad rune #: 23"; "hash")]
#[test_case("$", "bad rune $: 24"; "dollar")]
#[test_case("\"", "bad rune \": 22"; "double_quote")]
#[test_case("_", "bad rune _: 5f"; "underscore")]
#[test_case("€", "bad rune €: 20ac"; "euro_sign")]
#[test_case("Ⅷ", "bad rune Ⅷ: 2167"; "roman_numeral")]
#[test_case("²", "bad rune ²: b2"; "superscript_two")]
fn test_bad_rune(source: &str, expected_message: &str) {
    let err = tokenize(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRune);
    assert_eq!(err.message, expected_message);
    assert_eq!(err.lexeme, source);
    assert!(!err.is_fatal());
}

/// Numerals that are not decimal digits end an identifier.
#[test]
fn test_superscript_after_identifier() {
    let mut lexer = lexer("x²");
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::Identifier);
    assert_eq!(token.lexeme(), "x");

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.code, ErrorCode::BadRune);
    assert_eq!(err.message, "bad rune ²: b2");
    assert!(lexer.next_token().unwrap().is_eof());
}

#[test]
fn test_bad_rune_reports_line() {
    let mut lexer = lexer("func main(){\n\tx = 1;\n\ty = ?;\n}");
    let err = loop {
        match lexer.next_token() {
            Ok(token) => assert!(!token.is_eof(), "expected an error before end of input"),
            Err(e) => break e,
        }
    };
    assert_eq!(err.code, ErrorCode::BadRune);
    assert_eq!(err.position.file, "bad.fx");
    assert_eq!(err.position.line, 3);
}

// ============================================================================
// Bad Declaration Tests
// ============================================================================

#[test_case("i : 0"; "space_after_colon")]
#[test_case("i :0"; "digit_after_colon")]
#[test_case("i :"; "colon_at_end")]
#[test_case("i :: 0"; "double_colon")]
fn test_bad_declaration(source: &str) {
    let err = tokenize(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadDeclaration);
    assert_eq!(err.message, "bad declaration token");
    assert_eq!(err.lexeme, ":");
    assert!(err.hint.is_some());
}

#[test]
fn test_bad_declaration_pushes_back_next_character() {
    let mut lexer = lexer(":0");
    assert!(lexer.next_token().is_err());
    let token = lexer.next_token().unwrap();
    assert_eq!(token.kind(), TokenKind::IntLiteral);
    assert_eq!(token.lexeme(), "0");
}

// ============================================================================
// Bad Integer Literal Tests
// ============================================================================

#[test_case("0x", "0x"; "hex_prefix_only")]
#[test_case("0X;", "0X"; "upper_hex_prefix_only")]
#[test_case("0xg", "0x"; "hex_prefix_then_letter")]
#[test_case("9223372036854775808", "9223372036854775808"; "decimal_overflow")]
#[test_case("0x8000000000000000", "0x8000000000000000"; "hex_overflow")]
fn test_bad_integer_literal(source: &str, expected_lexeme: &str) {
    let err = tokenize(source).unwrap_err();
    assert_eq!(err.code, ErrorCode::BadIntegerLiteral);
    assert_eq!(err.message, format!("bad integer literal [{}]", expected_lexeme));
    assert_eq!(err.lexeme, expected_lexeme);
}

#[test_case("9223372036854775807", i64::MAX; "decimal_max")]
#[test_case("0x7fffffffffffffff", i64::MAX; "hex_max")]
#[test_case("0X7FFFFFFFFFFFFFFF", i64::MAX; "upper_hex_max")]
fn test_largest_integer_literal_is_accepted(source: &str, expected: i64) {
    let tokens = tokenize(source).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value(), expected);
}

#[test]
fn test_lexing_continues_after_bad_integer() {
    let mut lexer = lexer("0xg1 y");
    assert!(lexer.next_token().is_err());
    assert_eq!(lexer.next_token().unwrap().lexeme(), "g1");
    assert_eq!(lexer.next_token().unwrap().lexeme(), "y");
}

// ============================================================================
// Recovery Tests
// ============================================================================

#[test]
fn test_recovery_after_each_error_kind() {
    let mut lexer = lexer("a = @;\nb : 1;\nc = 0x;\nd = 4;");
    let mut errors = Vec::new();
    let mut identifiers = Vec::new();

    loop {
        match lexer.next_token() {
            Ok(token) if token.is_eof() => break,
            Ok(token) if token.kind() == TokenKind::Identifier => {
                identifiers.push(token.lexeme().to_string())
            }
            Ok(_) => {}
            Err(e) => {
                errors.push(e.code);
                lexer.skip_until(&[TokenKind::Semicolon]).unwrap();
            }
        }
    }

    assert_eq!(
        errors,
        vec![
            ErrorCode::BadRune,
            ErrorCode::BadDeclaration,
            ErrorCode::BadIntegerLiteral,
        ]
    );
    assert_eq!(identifiers, vec!["a", "b", "c", "d"]);
}

// ============================================================================
// Source Error Tests
// ============================================================================

#[test]
fn test_invalid_utf8_is_fatal() {
    let bytes: &[u8] = b"type \xC3\x28 record";
    let mut lexer = Lexer::new(fxlex::ReaderSource::new(bytes), "bytes");
    assert_eq!(lexer.next_token().unwrap().lexeme(), "type");

    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.code, ErrorCode::SourceRead);
    assert!(err.is_fatal());
    assert!(lexer.next_token().unwrap().is_eof());
    assert!(lexer.is_finished());
}

#[test]
fn test_skip_until_returns_fatal_errors() {
    let bytes: &[u8] = b"a b \xFF ; c";
    let mut lexer = Lexer::new(fxlex::ReaderSource::new(bytes), "bytes");
    let err = lexer.skip_until(&[TokenKind::Semicolon]).unwrap_err();
    assert!(err.is_fatal());
}

// ============================================================================
// Error Report Tests
// ============================================================================

#[test]
fn test_report_for_bad_rune() {
    let source = "vector v;\nCoord @p;\n";
    let err = tokenize(source).unwrap_err();
    let report = format_error(&err, Some(source));
    assert_eq!(
        report,
        "error[E002]: bad rune @: 40\n  --> <input>:2\n  |\n2 | Coord @p;\n  |\n"
    );
}

#[test]
fn test_report_for_bad_integer_has_hint() {
    let source = "x = 99999999999999999999;";
    let err = tokenize(source).unwrap_err();
    let report = format_error(&err, Some(source));
    assert!(report.starts_with("error[E003]: bad integer literal [99999999999999999999]\n"));
    assert!(report.contains("= hint: integer literals must fit in a signed 64-bit value"));
}
