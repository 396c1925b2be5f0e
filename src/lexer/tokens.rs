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

//! Token definitions for the fx language.

/// Code point reserved for end-of-input, one past the largest valid `char`.
pub const RUNE_EOF: u32 = char::MAX as u32 + 1;

/// The syntactic category of a token.
///
/// Single-character kinds use the character's code point as discriminant, so
/// `TokenKind::Semicolon == ';'` holds and parsers can match either form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum TokenKind {
    // Punctuation
    /// `(` - left parenthesis.
    LeftParen = '(' as u32,
    /// `)` - right parenthesis.
    RightParen = ')' as u32,
    /// `{` - left curly brace.
    LeftCurly = '{' as u32,
    /// `}` - right curly brace.
    RightCurly = '}' as u32,
    /// `[` - left square bracket.
    LeftSquare = '[' as u32,
    /// `]` - right square bracket.
    RightSquare = ']' as u32,
    /// `,` - comma.
    Comma = ',' as u32,
    /// `.` - field access.
    Dot = '.' as u32,
    /// `;` - statement terminator.
    Semicolon = ';' as u32,
    /// `=` - assignment.
    Assign = '=' as u32,

    // Integer operators
    /// `+` - addition.
    Plus = '+' as u32,
    /// `-` - subtraction.
    Minus = '-' as u32,
    /// `*` - multiplication.
    Times = '*' as u32,
    /// `/` - division.
    Divide = '/' as u32,
    /// `%` - remainder.
    Rem = '%' as u32,
    /// `>` - greater than.
    Greater = '>' as u32,
    /// `<` - less than.
    Less = '<' as u32,

    // Boolean operators
    /// `|` - or.
    Or = '|' as u32,
    /// `&` - and.
    And = '&' as u32,
    /// `!` - negation.
    Not = '!' as u32,
    /// `^` - exclusive or.
    Xor = '^' as u32,

    /// End of input.
    Eof = RUNE_EOF,
    /// `type`, `record`, `iter`, `if` or `else`.
    Keyword,
    /// Any other letter-initial word.
    Identifier,
    /// `func` - macro definition.
    Func,
    /// Decimal or hexadecimal integer literal.
    IntLiteral,
    /// `True` or `False`.
    BoolLiteral,
    /// `:=` - declaration.
    Declaration,
    /// `**` - exponentiation.
    Pow,
    /// `>=` - greater or equal.
    GreaterEqual,
    /// `<=` - less or equal.
    LessEqual,
}

impl TokenKind {
    /// The numeric identity of this kind.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Map a punctuation or operator character to its single-character kind.
    pub fn from_char(c: char) -> Option<TokenKind> {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftCurly,
            '}' => TokenKind::RightCurly,
            '[' => TokenKind::LeftSquare,
            ']' => TokenKind::RightSquare,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Times,
            '/' => TokenKind::Divide,
            '%' => TokenKind::Rem,
            '>' => TokenKind::Greater,
            '<' => TokenKind::Less,
            '|' => TokenKind::Or,
            '&' => TokenKind::And,
            '!' => TokenKind::Not,
            '^' => TokenKind::Xor,
            _ => return None,
        };
        Some(kind)
    }

    /// Check if this kind stands for exactly one character.
    pub fn is_single_char(self) -> bool {
        self.code() < RUNE_EOF
    }

    /// Check if this kind carries a meaningful `value`.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::IntLiteral | TokenKind::BoolLiteral)
    }

    /// Get a human-readable name for this token kind.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftCurly => "'{'",
            TokenKind::RightCurly => "'}'",
            TokenKind::LeftSquare => "'['",
            TokenKind::RightSquare => "']'",
            TokenKind::Comma => "','",
            TokenKind::Dot => "'.'",
            TokenKind::Semicolon => "';'",
            TokenKind::Assign => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Times => "'*'",
            TokenKind::Divide => "'/'",
            TokenKind::Rem => "'%'",
            TokenKind::Greater => "'>'",
            TokenKind::Less => "'<'",
            TokenKind::Or => "'|'",
            TokenKind::And => "'&'",
            TokenKind::Not => "'!'",
            TokenKind::Xor => "'^'",
            TokenKind::Eof => "end of input",
            TokenKind::Keyword => "keyword",
            TokenKind::Identifier => "identifier",
            TokenKind::Func => "'func'",
            TokenKind::IntLiteral => "integer literal",
            TokenKind::BoolLiteral => "boolean literal",
            TokenKind::Declaration => "':='",
            TokenKind::Pow => "'**'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::LessEqual => "'<='",
        }
    }
}

impl PartialEq<char> for TokenKind {
    fn eq(&self, other: &char) -> bool {
        self.code() == *other as u32
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    kind: TokenKind,
    value: i64,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, value: i64) -> Self {
        Self {
            lexeme: lexeme.into(),
            kind,
            value,
        }
    }

    /// The end-of-input token. Its lexeme is empty.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new(), 0)
    }

    /// The characters consumed to produce this token.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The syntactic category of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Decoded magnitude for integer literals, 1/0 for boolean literals,
    /// zero otherwise.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Check if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Classify a scanned word as a keyword, `func`, boolean literal, or
    /// identifier. Only exact matches count.
    pub fn from_keyword_or_identifier(word: String) -> Token {
        let (kind, value) = match word.as_str() {
            w if KEYWORDS.contains(&w) => (TokenKind::Keyword, 0),
            "func" => (TokenKind::Func, 0),
            "True" => (TokenKind::BoolLiteral, 1),
            "False" => (TokenKind::BoolLiteral, 0),
            _ => (TokenKind::Identifier, 0),
        };
        Token::new(kind, word, value)
    }
}

/// Words lexed as [`TokenKind::Keyword`].
pub const KEYWORDS: [&str; 5] = ["type", "record", "iter", "if", "else"];

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{\"{}\",{:?},{}}}", self.lexeme, self.kind, self.value)
    }
}
