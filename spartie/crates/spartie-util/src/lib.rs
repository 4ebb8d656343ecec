//! spartie-util - Shared foundation types for the Spartie toolchain.
//!
//! This crate holds the pieces every phase needs to talk about source code
//! and to report problems in it:
//!
//! - [`span`] - Byte ranges with line/column information
//! - [`diagnostic`] - Error diagnostics, a fluent builder, and the
//!   [`Handler`] that collects and renders them
//!
//! # Example
//!
//! ```
//! use spartie_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unexpected character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler};
pub use span::Span;
