//! Token definitions for the Spartie language.
//!
//! A [`Token`] pairs a [`TokenType`] with the text it was scanned from and
//! the location of its first character. Reserved words are listed once, in
//! [`KEYWORDS`]; [`keyword_from_ident`] and [`TokenType::is_keyword`] both
//! read that table.

use std::fmt;

use serde::{Deserialize, Serialize};
use spartie_util::Span;

/// Lexical category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenType {
    // Arithmetic
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,

    // Relational and assignment
    /// `<`
    LessThan,
    /// `<=`
    LessEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterEqual,
    /// `==`
    Equivalent,
    /// `=`
    Assign,

    // Structural
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `|`
    Or,

    // Literals
    /// A double-quoted string; the token text is the body without quotes.
    String,
    /// A run of digits with at most one decimal point.
    Number,
    /// A name that is not a reserved word.
    Identifier,

    // Keywords
    /// `if`
    If,
    /// `else`
    Else,
    /// `for`
    For,
    /// `while`
    While,
    /// `true`
    True,
    /// `false`
    False,
    /// `fun`
    Fun,
    /// `return`
    Return,
    /// `var`
    Var,
    /// `print`
    Print,
    /// `null`
    Null,

    // Sentinels
    /// Whitespace or a comment. Consumed but never handed to callers of
    /// [`crate::scan`].
    Ignore,
    /// Not-yet-classified placeholder. Never produced by the scanner.
    Undefined,
}

impl TokenType {
    /// Returns true for the reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true for string, number and identifier tokens.
    pub fn is_literal(self) -> bool {
        matches!(self, TokenType::String | TokenType::Number | TokenType::Identifier)
    }

    /// Returns true for arithmetic, relational and assignment operators.
    pub fn is_operator(self) -> bool {
        matches!(
            self,
            TokenType::Add
                | TokenType::Subtract
                | TokenType::Multiply
                | TokenType::Divide
                | TokenType::LessThan
                | TokenType::LessEqual
                | TokenType::GreaterThan
                | TokenType::GreaterEqual
                | TokenType::Equivalent
                | TokenType::Assign
        )
    }

    /// The upper-snake name of the category, e.g. `LESS_EQUAL`.
    pub fn name(self) -> &'static str {
        match self {
            TokenType::Add => "ADD",
            TokenType::Subtract => "SUBTRACT",
            TokenType::Multiply => "MULTIPLY",
            TokenType::Divide => "DIVIDE",
            TokenType::LessThan => "LESS_THAN",
            TokenType::LessEqual => "LESS_EQUAL",
            TokenType::GreaterThan => "GREATER_THAN",
            TokenType::GreaterEqual => "GREATER_EQUAL",
            TokenType::Equivalent => "EQUIVALENT",
            TokenType::Assign => "ASSIGN",
            TokenType::LeftParen => "LEFT_PAREN",
            TokenType::RightParen => "RIGHT_PAREN",
            TokenType::LeftBrace => "LEFT_BRACE",
            TokenType::RightBrace => "RIGHT_BRACE",
            TokenType::Semicolon => "SEMICOLON",
            TokenType::Or => "OR",
            TokenType::String => "STRING",
            TokenType::Number => "NUMBER",
            TokenType::Identifier => "IDENTIFIER",
            TokenType::If => "IF",
            TokenType::Else => "ELSE",
            TokenType::For => "FOR",
            TokenType::While => "WHILE",
            TokenType::True => "TRUE",
            TokenType::False => "FALSE",
            TokenType::Fun => "FUN",
            TokenType::Return => "RETURN",
            TokenType::Var => "VAR",
            TokenType::Print => "PRINT",
            TokenType::Null => "NULL",
            TokenType::Ignore => "IGNORE",
            TokenType::Undefined => "UNDEFINED",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reserved words and the token type each one produces.
pub const KEYWORDS: [(&str, TokenType); 11] = [
    ("if", TokenType::If),
    ("else", TokenType::Else),
    ("for", TokenType::For),
    ("while", TokenType::While),
    ("true", TokenType::True),
    ("false", TokenType::False),
    ("fun", TokenType::Fun),
    ("return", TokenType::Return),
    ("var", TokenType::Var),
    ("print", TokenType::Print),
    ("null", TokenType::Null),
];

/// Looks up a reserved word. Matching is exact and case-sensitive.
///
/// # Example
///
/// ```
/// use spartie_lex::{keyword_from_ident, TokenType};
///
/// assert_eq!(keyword_from_ident("while"), Some(TokenType::While));
/// assert_eq!(keyword_from_ident("While"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenType> {
    KEYWORDS
        .iter()
        .find(|(word, _)| *word == ident)
        .map(|&(_, kind)| kind)
}

/// A value attached to a token by a later evaluation stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// A parsed numeric value.
    Number(f64),
    /// A string value.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    Null,
}

/// One classified lexeme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// Lexical category.
    pub kind: TokenType,
    /// The exact lexeme, or the body of a string literal.
    pub text: String,
    /// Line of the token's first character (1-based).
    pub line: u32,
    /// Full extent of the lexeme, quotes included for strings.
    pub span: Span,
    /// Reserved for evaluation; the scanner always leaves this empty.
    #[serde(default)]
    pub literal: Option<Literal>,
}

impl Token {
    /// Creates a token without a literal value.
    pub fn new(kind: TokenType, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            line: span.line,
            span,
            literal: None,
        }
    }

    /// Returns the token with `literal` attached.
    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literal = Some(literal);
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line: {} Token: {} Text: {}", self.line, self.kind, self.text)
    }
}
