//! String literal lexing.

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenType};

/// Lexes a double-quoted string literal.
///
/// The body is taken verbatim: there are no escape sequences, and line
/// breaks inside the literal are allowed (and counted). The token text is
/// the body without quotes; the span covers the quotes too.
///
/// # Errors
///
/// [`ScanError::UnterminatedString`] if input ends before the closing quote.
pub fn lex_string(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    let start = cursor.mark();
    cursor.advance();

    let body_start = cursor.position();
    cursor.eat_while(|c| c != '"');

    if cursor.is_at_end() {
        return Err(ScanError::UnterminatedString {
            span: cursor.span_from(start),
        });
    }

    let body = cursor.slice_from(body_start);
    cursor.advance();

    Ok(Token::new(TokenType::String, body, cursor.span_from(start)))
}
