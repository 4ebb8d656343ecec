//! Diagnostic module - Error reporting infrastructure.
//!
//! Diagnostics are built with [`DiagnosticBuilder`], collected by a
//! [`Handler`], and rendered for humans with [`Diagnostic::render`] or
//! [`Handler::emit_to`].
//!
//! # Examples
//!
//! ```
//! use spartie_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let source = "var x = #;";
//! let handler = Handler::new();
//! DiagnosticBuilder::error("Unexpected character '#' at 8")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(8, 9, 1, 9))
//!     .emit(&handler);
//!
//! let mut out = Vec::new();
//! handler.emit_to(&mut out, Some(source)).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.starts_with("error[E1001]: Unexpected character '#' at 8"));
//! ```

mod builder;
mod codes;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;

pub use crate::span::Span;

use std::cell::RefCell;
use std::fmt::{self, Write as _};
use std::io;

/// An error message with a code and source location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Render the diagnostic as multi-line text.
    ///
    /// When `source` is given and the span points at a real line, the
    /// offending line is quoted with a caret underline.
    ///
    /// # Examples
    ///
    /// ```
    /// use spartie_util::diagnostic::{Diagnostic, Span};
    ///
    /// let diag = Diagnostic::error("bad token", Span::new(4, 5, 1, 5));
    /// let text = diag.render(Some("var # = 1;"));
    /// assert!(text.contains("--> line 1:5"));
    /// assert!(text.contains("    ^"));
    /// ```
    pub fn render(&self, source: Option<&str>) -> String {
        let mut out = String::new();

        match self.code {
            Some(code) => {
                let _ = writeln!(out, "error[{}]: {}", code, self.message);
            },
            None => {
                let _ = writeln!(out, "error: {}", self.message);
            },
        }

        if self.span.line > 0 {
            let _ = writeln!(out, "  --> line {}:{}", self.span.line, self.span.column);

            if let Some((line_text, indent)) = source.and_then(|s| self.source_line(s)) {
                let gutter = self.span.line.to_string();
                let pad = " ".repeat(gutter.len());
                let width = self
                    .span
                    .slice(source.unwrap_or_default())
                    .map(|s| s.lines().next().unwrap_or_default().chars().count())
                    .unwrap_or(0)
                    .max(1);

                let _ = writeln!(out, "{} |", pad);
                let _ = writeln!(out, "{} | {}", gutter, line_text);
                let _ = writeln!(out, "{} | {}{}", pad, " ".repeat(indent), "^".repeat(width));
            }
        }

        for note in &self.notes {
            let _ = writeln!(out, "  = note: {}", note);
        }
        for help in &self.helps {
            let _ = writeln!(out, "  = help: {}", help);
        }

        out
    }

    /// The physical source line holding `span.start`, and the number of
    /// characters before the span on that line.
    ///
    /// The line is found from the byte offset, not from `span.line`, so it
    /// is right whatever rule produced the line number.
    fn source_line<'a>(&self, source: &'a str) -> Option<(&'a str, usize)> {
        let start = self.span.start;
        let before = source.get(..start)?;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);

        let line_text = source[line_start..line_end].trim_end_matches('\r');
        let indent = source[line_start..start].chars().count();
        Some((line_text, indent))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

/// Collects diagnostics emitted during a phase.
///
/// The handler uses interior mutability so that it can be shared by
/// reference between the phase and whoever reports on it afterwards.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic.
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Returns true if any error has been recorded.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.borrow().is_empty()
    }

    /// Number of recorded errors.
    pub fn error_count(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// A snapshot of all recorded diagnostics, in emission order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Render every recorded diagnostic to `out`.
    pub fn emit_to<W: io::Write>(&self, out: &mut W, source: Option<&str>) -> io::Result<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            out.write_all(diagnostic.render(source).as_bytes())?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("one", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("two", Span::DUMMY));
        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.diagnostics()[1].message, "two");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::error("bad token", Span::DUMMY);
        assert_eq!(diag.to_string(), "error: bad token");
    }

    #[test]
    fn test_render_without_source() {
        let diag = DiagnosticBuilder::error("No ending double quotes for specified string.")
            .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
            .span(Span::new(0, 3, 2, 1))
            .build();
        let text = diag.render(None);
        assert_eq!(
            text,
            "error[E1002]: No ending double quotes for specified string.\n  --> line 2:1\n"
        );
    }

    #[test]
    fn test_render_with_source_underlines_span() {
        let source = "var a = 1;\nprint 1.2.3;";
        let diag = Diagnostic::error("More than one decimal in number", Span::new(17, 22, 2, 7));
        let text = diag.render(Some(source));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "error: More than one decimal in number");
        assert_eq!(lines[1], "  --> line 2:7");
        assert_eq!(lines[2], "  |");
        assert_eq!(lines[3], "2 | print 1.2.3;");
        assert_eq!(lines[4], "  |       ^^^^^");
    }

    #[test]
    fn test_render_finds_line_by_offset() {
        // Line 3 as counted with `\t` ending a line; the text is on line 2.
        let source = "var a\t= 1;\nb # c;\r\nd";
        let diag = Diagnostic::error("Unexpected character '#' at 13", Span::new(13, 14, 3, 3));
        let lines: Vec<String> = diag.render(Some(source)).lines().map(str::to_string).collect();
        assert_eq!(lines[1], "  --> line 3:3");
        assert_eq!(lines[3], "3 | b # c;");
        assert_eq!(lines[4], "  |   ^");
    }

    #[test]
    fn test_render_first_line_and_out_of_bounds() {
        let diag = Diagnostic::error("x", Span::new(0, 1, 1, 1));
        assert!(diag.render(Some("@ y")).contains("1 | @ y\n  | ^\n"));

        let diag = Diagnostic::error("x", Span::new(40, 41, 1, 1));
        assert_eq!(diag.render(Some("short")), "error: x\n  --> line 1:1\n");
    }

    #[test]
    fn test_render_dummy_span_has_no_location() {
        let text = DiagnosticBuilder::error("heads up")
            .help("look here")
            .build()
            .render(Some("x"));
        assert_eq!(text, "error: heads up\n  = help: look here\n");
    }

    #[test]
    fn test_emit_to_writes_all() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("one", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("two", Span::DUMMY));
        let mut out = Vec::new();
        handler.emit_to(&mut out, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "error: one\nerror: two\n");
    }
}
