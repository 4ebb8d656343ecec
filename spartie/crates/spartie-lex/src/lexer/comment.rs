//! Divide-or-comment lexing.

use crate::cursor::Cursor;
use crate::token::{Token, TokenType};

/// Lexes `/` as a division operator or `//` as a line comment.
///
/// A comment runs up to, but not including, the next `\n` (or the end of
/// input) and comes back as a [`TokenType::Ignore`] token. Leaving the
/// newline in place lets it be counted like any other line break.
pub fn lex_slash(cursor: &mut Cursor<'_>) -> Token {
    let start = cursor.mark();
    cursor.advance();

    let kind = if cursor.match_char('/') {
        cursor.eat_while(|c| c != '\n');
        TokenType::Ignore
    } else {
        TokenType::Divide
    };

    Token::new(kind, cursor.lexeme(start), cursor.span_from(start))
}
