//! Token contract shared by the lexer and the parser.

use crate::lexer::span::Span;

/// A whitespace-delimited lexeme with its source span.
///
/// Tokens are not classified here; the parser decides whether a lexeme is an
/// action marker, an operator, an identifier or a literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Token text preserved as scanned.
    pub lexeme: String,
    /// Line and byte range of the lexeme.
    pub span: Span,
}

impl Token {
    /// Creates a token value.
    pub fn new(lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            lexeme: lexeme.into(),
            span,
        }
    }

    /// Returns the token text.
    pub fn as_str(&self) -> &str {
        &self.lexeme
    }
}
