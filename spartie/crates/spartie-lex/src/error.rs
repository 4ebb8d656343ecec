//! Error types for the scanner.
//!
//! Every lexical error is fatal to the scan that raised it: `scan` stops at
//! the first one and returns it. Hosts that want the classic "print and
//! exit" behavior can use [`ScanError::report`] and [`ScanError::exit_code`].

use std::io;
use std::path::PathBuf;

use spartie_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Span};
use thiserror::Error;

/// Process exit status reserved for interpreter errors.
pub const INTERPRET_ERROR: i32 = 65;

/// A lexical error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// No recognizer accepts the character under the cursor.
    #[error("Unexpected character '{}' at {}", .character, .span.start)]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Location of the character.
        span: Span,
    },

    /// Input ended before the closing quote of a string literal.
    #[error("No ending double quotes for specified string.")]
    UnterminatedString {
        /// From the opening quote to the end of input.
        span: Span,
    },

    /// A numeral run contains more than one decimal point.
    #[error("More than one decimal in number")]
    TooManyDecimals {
        /// The whole numeral run.
        text: String,
        /// Location of the numeral run.
        span: Span,
    },
}

impl ScanError {
    /// Location of the error.
    pub fn span(&self) -> Span {
        match self {
            ScanError::UnexpectedCharacter { span, .. }
            | ScanError::UnterminatedString { span }
            | ScanError::TooManyDecimals { span, .. } => *span,
        }
    }

    /// Line the error was raised on (1-based).
    pub fn line(&self) -> u32 {
        self.span().line
    }

    /// Absolute byte offset where the offending lexeme starts.
    pub fn position(&self) -> usize {
        self.span().start
    }

    /// Diagnostic code for this error kind.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            ScanError::UnexpectedCharacter { .. } => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            ScanError::UnterminatedString { .. } => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            ScanError::TooManyDecimals { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
        }
    }

    /// Exit status a host process should terminate with.
    pub fn exit_code(&self) -> i32 {
        INTERPRET_ERROR
    }

    /// Writes the one-line report `Error occurred on line <n> : <message>`.
    ///
    /// ```
    /// use spartie_lex::scan;
    ///
    /// let err = scan("\"open").unwrap_err();
    /// let mut out = Vec::new();
    /// err.report(&mut out).unwrap();
    /// assert_eq!(
    ///     String::from_utf8(out).unwrap(),
    ///     "Error occurred on line 1 : No ending double quotes for specified string.\n"
    /// );
    /// ```
    pub fn report<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Error occurred on line {} : {}", self.line(), self)
    }

    /// Converts the error into a diagnostic for a [`spartie_util::Handler`].
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.to_string())
            .code(self.code())
            .span(self.span());

        match self {
            ScanError::UnexpectedCharacter { .. } => builder
                .help("allowed characters are ASCII letters, digits, whitespace and + - * / < > = ; ( ) { } | \"")
                .build(),
            ScanError::UnterminatedString { .. } => {
                builder.help("add a closing '\"' to the string").build()
            },
            ScanError::TooManyDecimals { text, .. } => builder
                .note(format!("found `{}`", text))
                .help("a number may contain at most one '.'")
                .build(),
        }
    }
}

/// Result type alias for scanning.
pub type ScanResult<T> = std::result::Result<T, ScanError>;

/// Error type for loading a [`crate::config::ScannerConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
