//! Operator and punctuation lexing.
//!
//! Covers the single-character tokens (including whitespace, which is
//! produced as [`TokenType::Ignore`]) and the comparison/assignment family
//! `<`, `<=`, `>`, `>=`, `=`, `==`.

use crate::cursor::Cursor;
use crate::token::{Token, TokenType};

/// Maps a character that always forms a one-character token to its type.
///
/// Whitespace maps to [`TokenType::Ignore`]; [`lex_single_char`] applies the
/// line counting policy to it.
pub fn single_char_kind(c: char) -> Option<TokenType> {
    let kind = match c {
        '+' => TokenType::Add,
        '-' => TokenType::Subtract,
        '*' => TokenType::Multiply,
        ';' => TokenType::Semicolon,
        '(' => TokenType::LeftParen,
        ')' => TokenType::RightParen,
        '|' => TokenType::Or,
        '{' => TokenType::LeftBrace,
        '}' => TokenType::RightBrace,
        ' ' | '\n' | '\r' | '\t' => TokenType::Ignore,
        _ => return None,
    };
    Some(kind)
}

/// Consumes one character as a token of type `kind`.
pub fn lex_single_char(cursor: &mut Cursor<'_>, kind: TokenType) -> Token {
    let start = cursor.mark();
    if kind == TokenType::Ignore {
        cursor.advance_separator();
    } else {
        cursor.advance();
    }
    Token::new(kind, cursor.lexeme(start), cursor.span_from(start))
}

/// Lexes `<`, `<=`, `>`, `>=`, `=` or `==`.
///
/// The cursor must be on `<`, `>` or `=`. A following `=` is consumed as
/// part of the same token, so the cursor always ends up past the whole
/// operator.
///
/// ```
/// use spartie_lex::cursor::Cursor;
/// use spartie_lex::lexer::operator::lex_comparison;
/// use spartie_lex::TokenType;
///
/// let mut cursor = Cursor::new(">=1");
/// let token = lex_comparison(&mut cursor);
/// assert_eq!(token.kind, TokenType::GreaterEqual);
/// assert_eq!(cursor.current_char(), '1');
/// ```
pub fn lex_comparison(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.mark();
    let first = cursor.current_char();
    debug_assert!(matches!(first, '<' | '>' | '='));

    cursor.advance();
    let with_equals = cursor.match_char('=');

    let kind = match (first, with_equals) {
        ('<', true) => TokenType::LessEqual,
        ('<', false) => TokenType::LessThan,
        ('>', true) => TokenType::GreaterEqual,
        ('>', false) => TokenType::GreaterThan,
        (_, true) => TokenType::Equivalent,
        (_, false) => TokenType::Assign,
    };

    Token::new(kind, cursor.lexeme(start), cursor.span_from(start))
}
