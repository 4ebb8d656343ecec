//! Character cursor for traversing source code.
//!
//! The `Cursor` owns all mutable scanning state: the byte position of the
//! next unread character and the line/column it sits on. Recognizers take
//! `&mut Cursor` and are the only code that moves it.

use spartie_util::Span;

use crate::config::LineCounting;

/// A saved cursor location, taken at the start of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based, in characters).
    pub column: u32,
}

/// A cursor for traversing source code character by character.
///
/// # Example
///
/// ```
/// use spartie_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("var x");
/// assert_eq!(cursor.current_char(), 'v');
/// cursor.advance();
/// assert_eq!(cursor.current_char(), 'a');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,

    /// Which characters end a line.
    line_counting: LineCounting,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor that counts `\n` as the only line terminator.
    pub fn new(source: &'a str) -> Self {
        Self::with_line_counting(source, LineCounting::default())
    }

    /// Creates a cursor with an explicit line counting policy.
    pub fn with_line_counting(source: &'a str, line_counting: LineCounting) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            line_counting,
        }
    }

    /// Returns the current character, or `'\0'` at the end of the source.
    pub fn current_char(&self) -> char {
        self.char_at(0)
    }

    /// Returns the character at the given byte offset from current position.
    ///
    /// Returns `'\0'` past the end of the source.
    ///
    /// ```
    /// use spartie_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("<=");
    /// assert_eq!(cursor.peek_char(1), '=');
    /// assert_eq!(cursor.peek_char(2), '\0');
    /// ```
    #[inline]
    pub fn peek_char(&self, offset: usize) -> char {
        self.char_at(offset)
    }

    #[inline]
    fn char_at(&self, offset: usize) -> char {
        let pos = self.position + offset;
        if pos >= self.source.len() {
            return '\0';
        }

        // Fast path for ASCII
        let b = self.source.as_bytes()[pos];
        if b < 128 {
            return b as char;
        }

        self.source
            .get(pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or('\0')
    }

    /// Advances the cursor past the current character.
    ///
    /// Updates line and column tracking; only `\n` starts a new line here,
    /// whatever the line counting policy. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.source[self.position..].chars().next() else {
            return;
        };

        self.position += c.len_utf8();
        if c == '\n' {
            self.new_line();
        } else {
            self.column += 1;
        }
    }

    /// Advances past a whitespace character that separates tokens.
    ///
    /// Unlike [`Cursor::advance`], this applies the line counting policy,
    /// so in legacy mode a separating `\r` or `\t` also starts a new line.
    ///
    /// ```
    /// use spartie_lex::config::LineCounting;
    /// use spartie_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::with_line_counting("\tx", LineCounting::Legacy);
    /// cursor.advance_separator();
    /// assert_eq!(cursor.line(), 2);
    /// ```
    pub fn advance_separator(&mut self) {
        let c = self.current_char();
        self.advance();
        if c != '\n' && self.line_counting.is_terminator(c) {
            self.new_line();
        }
    }

    fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    /// Advances while `predicate` holds for the current character.
    ///
    /// ```
    /// use spartie_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while !self.is_at_end() && predicate(self.current_char()) {
            self.advance();
        }
    }

    /// Consumes the current character if it equals `expected`.
    ///
    /// ```
    /// use spartie_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("==");
    /// assert!(cursor.match_char('='));
    /// assert!(cursor.match_char('='));
    /// assert!(!cursor.match_char('='));
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if !self.is_at_end() && self.current_char() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor is at the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Records the current location as the start of a lexeme.
    pub fn mark(&self) -> Mark {
        Mark {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns the source text from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the lexeme consumed since `mark`.
    pub fn lexeme(&self, mark: Mark) -> &'a str {
        self.slice_from(mark.position)
    }

    /// Returns the span covering everything consumed since `mark`.
    pub fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.position, self.position, mark.line, mark.column)
    }

    /// Returns the full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
