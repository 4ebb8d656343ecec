//! Lexer module.
//!
//! The scanner is split into the driving loop and one file per recognizer
//! family. Recognizers are free functions over an explicit `&mut Cursor`,
//! so each one can be exercised on its own:
//!
//! - `core` - [`Scanner`], dispatch on the current character, and the
//!   driving loop
//! - [`operator`] - single-character punctuation, whitespace, comparison and
//!   assignment operators
//! - [`comment`] - divide or line comment
//! - [`string`] - string literals
//! - [`number`] - numeric literals
//! - [`identifier`] - identifiers and keywords

pub mod comment;
mod core;
pub mod identifier;
pub mod number;
pub mod operator;
pub mod string;

pub use self::core::Scanner;
