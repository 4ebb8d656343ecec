//! spartie-lex - Lexical Scanner for the Spartie Scripting Language
//!
//! This crate turns Spartie source text into an ordered sequence of typed
//! tokens for a parser to consume. Scanning is a single forward pass with
//! one character of lookahead and no backtracking.
//!
//! # Example Usage
//!
//! ```
//! use spartie_lex::{scan, TokenType};
//!
//! let tokens = scan("var x = 10;").unwrap();
//!
//! let kinds: Vec<TokenType> = tokens.iter().map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenType::Var,
//!         TokenType::Identifier,
//!         TokenType::Assign,
//!         TokenType::Number,
//!         TokenType::Semicolon,
//!     ]
//! );
//! assert!(tokens.iter().all(|t| t.line == 1));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the keyword table
//! - [`lexer`] - The scanner and its recognizers
//! - [`cursor`] - Character cursor for source traversal
//! - [`config`] - Scanner configuration
//! - [`error`] - Scan and configuration errors
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `if`, `else`, `for`, `while`, `true`, `false`, `fun`, `return`, `var`,
//! `print`, `null`
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z][a-zA-Z0-9]*`
//!
//! ## Literals
//!
//! - **Number**: `42`, `3.14`, `7.` (at most one `.`)
//! - **String**: `"hello"` (no escape sequences; may span lines)
//!
//! ## Operators and punctuation
//!
//! `+ - * /`, `< <= > >= == =`, `( ) { } ; |`
//!
//! ## Skipped
//!
//! Spaces, tabs, carriage returns, newlines, and `//` line comments.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use config::{LineCounting, ScannerConfig};
pub use cursor::Cursor;
pub use error::{ConfigError, ConfigResult, ScanError, ScanResult, INTERPRET_ERROR};
pub use lexer::Scanner;
pub use token::{keyword_from_ident, Literal, Token, TokenType, KEYWORDS};

use spartie_util::Handler;

/// Scans `source` with the default configuration.
///
/// # Errors
///
/// The first lexical error in the source.
pub fn scan(source: &str) -> ScanResult<Vec<Token>> {
    Scanner::new(source).scan()
}

/// Scans `source` with an explicit configuration.
///
/// # Errors
///
/// The first lexical error in the source.
pub fn scan_with_config(source: &str, config: &ScannerConfig) -> ScanResult<Vec<Token>> {
    Scanner::with_config(source, config).scan()
}

/// Scans `source`, also recording a failure as a diagnostic in `handler`.
///
/// ```
/// use spartie_lex::scan_with_handler;
/// use spartie_util::Handler;
///
/// let handler = Handler::new();
/// assert!(scan_with_handler("1.2.3", &handler).is_err());
/// assert_eq!(handler.error_count(), 1);
/// ```
///
/// # Errors
///
/// The first lexical error in the source.
pub fn scan_with_handler(source: &str, handler: &Handler) -> ScanResult<Vec<Token>> {
    scan(source).map_err(|err| {
        handler.emit_diagnostic(err.to_diagnostic());
        err
    })
}
