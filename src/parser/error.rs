//! Parser error contracts.

use std::fmt;

use crate::lexer::{Span, Token};

/// Stable parser error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// A statement does not start with `=` or `@`.
    IllegalAction,
    /// An expression token is not an operator, identifier or integer literal.
    IllegalOperator,
    /// The assignment target is not an identifier.
    IllegalTarget,
    /// Token stream ended, or an action marker appeared, while an expression
    /// or statement was incomplete.
    PrematureEnd,
    /// Expression nesting exceeded [`crate::parser::ParseOptions::max_nesting`].
    NestingLimitExceeded,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalAction => write!(f, "illegal action"),
            Self::IllegalOperator => write!(f, "illegal operator"),
            Self::IllegalTarget => write!(f, "illegal assignment target"),
            Self::PrematureEnd => write!(f, "premature end of program"),
            Self::NestingLimitExceeded => write!(f, "nesting limit exceeded"),
        }
    }
}

/// Parser error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Source span of the offending token, when there is one.
    pub span: Option<Span>,
    /// Expected token labels.
    pub expected: Vec<String>,
    /// Offending token text.
    pub found: Option<String>,
}

impl ParseError {
    /// Creates a parser error.
    pub fn new(
        kind: ParseErrorKind,
        span: Option<Span>,
        expected: Vec<String>,
        found: Option<String>,
    ) -> Self {
        Self {
            kind,
            span,
            expected,
            found,
        }
    }

    /// Creates an `IllegalAction` error.
    pub fn illegal_action(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::IllegalAction,
            Some(token.span),
            vec!["=".to_string(), "@".to_string()],
            Some(token.lexeme.clone()),
        )
    }

    /// Creates an `IllegalOperator` error.
    pub fn illegal_operator(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::IllegalOperator,
            Some(token.span),
            vec!["expression".to_string()],
            Some(token.lexeme.clone()),
        )
    }

    /// Creates an `IllegalTarget` error.
    pub fn illegal_target(token: &Token) -> Self {
        Self::new(
            ParseErrorKind::IllegalTarget,
            Some(token.span),
            vec!["identifier".to_string()],
            Some(token.lexeme.clone()),
        )
    }

    /// Creates a `PrematureEnd` error at end of input.
    pub fn premature_end(expected: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self::new(
            ParseErrorKind::PrematureEnd,
            None,
            expected.into_iter().map(Into::into).collect(),
            None,
        )
    }

    /// Creates a `PrematureEnd` error for an action marker met mid-expression.
    pub fn premature_end_at(token: &Token, expected: impl Into<String>) -> Self {
        Self::new(
            ParseErrorKind::PrematureEnd,
            Some(token.span),
            vec![expected.into()],
            Some(token.lexeme.clone()),
        )
    }

    /// Creates a `NestingLimitExceeded` error.
    pub fn nesting_limit_exceeded(token: &Token, limit: usize) -> Self {
        Self::new(
            ParseErrorKind::NestingLimitExceeded,
            Some(token.span),
            vec![format!("nesting <= {limit}")],
            Some(token.lexeme.clone()),
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(found) = &self.found {
            write!(f, ": `{found}`")?;
        }
        if let Some(span) = self.span {
            write!(f, " ({span})")?;
        }
        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected.join(" or "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}
