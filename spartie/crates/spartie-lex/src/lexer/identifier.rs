//! Identifier and keyword lexing.

use crate::cursor::Cursor;
use crate::token::{keyword_from_ident, Token, TokenType};

/// Lexes an identifier or keyword.
///
/// The cursor must be on an ASCII letter. The lexeme continues through
/// ASCII letters and digits; underscores are not part of identifiers.
/// Reserved words come back as their keyword type.
pub fn lex_identifier(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.mark();
    cursor.eat_while(|c| c.is_ascii_alphanumeric());

    let text = cursor.lexeme(start);
    let kind = keyword_from_ident(text).unwrap_or(TokenType::Identifier);

    Token::new(kind, text, cursor.span_from(start))
}
