//! Numeric literal lexing.

use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenType};

/// Lexes a numeric literal.
///
/// The cursor must be on an ASCII digit. Digits and `.` are consumed
/// greedily, and the raw numeral becomes the token text; converting it to
/// a number is left to later stages. Leading-digit and trailing-dot forms
/// such as `1.` are accepted.
///
/// # Errors
///
/// [`ScanError::TooManyDecimals`] if the run holds more than one `.`.
pub fn lex_number(cursor: &mut Cursor<'_>) -> ScanResult<Token> {
    let start = cursor.mark();
    cursor.eat_while(|c| c.is_ascii_digit() || c == '.');

    let text = cursor.lexeme(start);
    let span = cursor.span_from(start);

    if text.matches('.').count() > 1 {
        return Err(ScanError::TooManyDecimals {
            text: text.to_string(),
            span,
        });
    }

    Ok(Token::new(TokenType::Number, text, span))
}
