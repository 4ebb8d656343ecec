//! Core scanner implementation.
//!
//! This module contains the [`Scanner`] struct, the dispatch over the
//! character under the cursor, and the driving loop.

use std::iter::FusedIterator;

use crate::config::ScannerConfig;
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::lexer::{comment, identifier, number, operator, string};
use crate::token::{Token, TokenType};

/// Scanner for the Spartie language.
///
/// A scanner is built for one source string and driven to completion once,
/// either with [`Scanner::scan`] or by iterating it. Iteration yields
/// `Result`s, skips whitespace and comments, and stops after the first
/// error.
///
/// # Example
///
/// ```
/// use spartie_lex::{Scanner, TokenType};
///
/// let kinds: Vec<TokenType> = Scanner::new("x <= 5")
///     .map(|token| token.map(|t| t.kind))
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(kinds, [TokenType::Identifier, TokenType::LessEqual, TokenType::Number]);
/// ```
pub struct Scanner<'a> {
    /// Character cursor for source traversal.
    cursor: Cursor<'a>,

    /// Set once the scanner has reported an error.
    failed: bool,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, &ScannerConfig::default())
    }

    /// Creates a scanner with an explicit configuration.
    pub fn with_config(source: &'a str, config: &ScannerConfig) -> Self {
        Self {
            cursor: Cursor::with_line_counting(source, config.line_counting),
            failed: false,
        }
    }

    /// Classifies the next lexeme.
    ///
    /// Unlike the iterator, this also returns [`TokenType::Ignore`] tokens
    /// for whitespace and comments, so every consumed byte is covered by
    /// exactly one returned span. Returns `None` at the end of input and
    /// after an error has been returned.
    pub fn next_token(&mut self) -> Option<ScanResult<Token>> {
        if self.failed || self.cursor.is_at_end() {
            return None;
        }

        let result = self.classify();
        match &result {
            Ok(token) => {
                tracing::trace!(kind = %token.kind, line = token.line, text = %token.text, "token");
            },
            Err(_) => self.failed = true,
        }
        Some(result)
    }

    fn classify(&mut self) -> ScanResult<Token> {
        let c = self.cursor.current_char();

        if let Some(kind) = operator::single_char_kind(c) {
            return Ok(operator::lex_single_char(&mut self.cursor, kind));
        }

        match c {
            '<' | '>' | '=' => Ok(operator::lex_comparison(&mut self.cursor)),
            '/' => Ok(comment::lex_slash(&mut self.cursor)),
            '"' => string::lex_string(&mut self.cursor),
            c if c.is_ascii_digit() => number::lex_number(&mut self.cursor),
            c if c.is_ascii_alphabetic() => Ok(identifier::lex_identifier(&mut self.cursor)),
            c => {
                let start = self.cursor.mark();
                let mut end = self.cursor.clone();
                end.advance();
                Err(ScanError::UnexpectedCharacter {
                    character: c,
                    span: end.span_from(start),
                })
            },
        }
    }

    /// Scans the whole source.
    ///
    /// Returns the tokens in source order, without whitespace or comments
    /// and without an end-of-input marker.
    ///
    /// # Errors
    ///
    /// The first lexical error encountered.
    pub fn scan(self) -> ScanResult<Vec<Token>> {
        let span = tracing::debug_span!("scan", bytes = self.cursor.source().len());
        let _guard = span.enter();

        let result: ScanResult<Vec<Token>> = self.collect();
        match &result {
            Ok(tokens) => tracing::debug!(count = tokens.len(), "scan complete"),
            Err(err) => tracing::warn!(line = err.line(), position = err.position(), %err, "scan failed"),
        }
        result
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the byte offset of the next unread character.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.next_token()? {
                Ok(token) if token.kind == TokenType::Ignore => continue,
                other => return Some(other),
            }
        }
    }
}

impl<'a> FusedIterator for Scanner<'a> {}
