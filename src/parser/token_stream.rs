//! Destructive token stream with one token of lookahead.

use std::collections::VecDeque;

use crate::lexer::{InputMode, Lexer, Token};
use crate::parser::error::ParseError;

/// Ordered tokens consumed from the front.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
}

impl TokenStream {
    /// Creates a stream over already-scanned tokens.
    pub fn new(tokens: impl IntoIterator<Item = Token>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Scans `input` and wraps the result.
    pub fn from_source(input: &str, mode: InputMode) -> Self {
        Self::new(Lexer::new(input, mode).tokenize())
    }

    /// Returns `true` once every token has been consumed.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Returns the number of tokens left.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    /// Consumes and returns the next token.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    /// Consumes the next token, failing with `PrematureEnd` when none is left.
    pub fn expect(&mut self, expected_label: impl Into<String>) -> Result<Token, ParseError> {
        self.next()
            .ok_or_else(|| ParseError::premature_end([expected_label.into()]))
    }
}
