//! Recursive-descent parser for the prefix source language.
//!
//! Every statement starts with an action marker. Expressions are fully
//! prefix: an operator is followed by exactly as many sub-expressions as it
//! takes, left operand first, so no precedence rules are needed.

use tracing::debug;

use crate::lexer::Token;
use crate::parser::ast::{Action, BinaryOp, Expr, Program, UnaryOp};
use crate::parser::error::ParseError;
use crate::parser::token_stream::TokenStream;

/// Marker starting an assignment: `= name <expr>`.
pub const ASSIGN_MARKER: &str = "=";
/// Marker starting a print: `@ <expr>`.
pub const PRINT_MARKER: &str = "@";

/// Default maximum expression nesting depth.
///
/// Parsing, interpretation and code generation all recurse once per level, so
/// this must fit an unoptimized build on a 2 MiB thread stack.
pub const DEFAULT_MAX_NESTING: usize = 256;

/// Parser behavior options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Maximum expression nesting depth.
    pub max_nesting: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

/// Returns `true` when `lexeme` can name a variable.
pub fn is_identifier(lexeme: &str) -> bool {
    lexeme
        .chars()
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic())
}

/// Parses `lexeme` as a `-?[0-9]+` literal that fits in an `i32`.
pub fn parse_literal(lexeme: &str) -> Option<i32> {
    let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    lexeme.parse().ok()
}

fn is_action_marker(lexeme: &str) -> bool {
    lexeme == ASSIGN_MARKER || lexeme == PRINT_MARKER
}

/// Prefix-notation parser over a token stream.
pub struct Parser {
    options: ParseOptions,
    tokens: TokenStream,
    depth: usize,
}

impl Parser {
    /// Creates a parser with explicit options.
    pub fn new(options: ParseOptions, tokens: TokenStream) -> Self {
        Self {
            options,
            tokens,
            depth: 0,
        }
    }

    /// Returns parser options.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parses actions until the stream is exhausted.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut actions = Vec::new();
        while !self.tokens.is_empty() {
            actions.push(self.parse_action()?);
        }
        debug!(actions = actions.len(), "parsed program");
        Ok(Program::new(actions))
    }

    /// Parses one assignment or print statement.
    pub fn parse_action(&mut self) -> Result<Action, ParseError> {
        let marker = self.tokens.expect("action")?;
        match marker.as_str() {
            ASSIGN_MARKER => {
                let target = self.tokens.expect("assignment target")?;
                if !is_identifier(target.as_str()) {
                    return Err(ParseError::illegal_target(&target));
                }
                let expr = self.parse_expr()?;
                Ok(Action::assign(target.lexeme, expr))
            }
            PRINT_MARKER => Ok(Action::print(self.parse_expr()?)),
            _ => Err(ParseError::illegal_action(&marker)),
        }
    }

    /// Parses one prefix expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let Some(next) = self.tokens.peek() else {
            return Err(ParseError::premature_end(["expression"]));
        };
        if is_action_marker(next.as_str()) {
            return Err(ParseError::premature_end_at(next, "expression"));
        }

        let token = self.tokens.expect("expression")?;
        if let Some(op) = UnaryOp::from_symbol(token.as_str()) {
            self.enter(&token)?;
            let operand = self.parse_expr();
            self.depth -= 1;
            return Ok(Expr::unary(op, operand?));
        }

        if let Some(op) = BinaryOp::from_symbol(token.as_str()) {
            self.enter(&token)?;
            let operands = self.parse_operands();
            self.depth -= 1;
            let (lhs, rhs) = operands?;
            return Ok(Expr::binary(op, lhs, rhs));
        }

        if is_identifier(token.as_str()) {
            return Ok(Expr::variable(token.lexeme));
        }

        match parse_literal(token.as_str()) {
            Some(value) => Ok(Expr::constant(value)),
            None => Err(ParseError::illegal_operator(&token)),
        }
    }

    fn parse_operands(&mut self) -> Result<(Expr, Expr), ParseError> {
        let lhs = self.parse_expr()?;
        let rhs = self.parse_expr()?;
        Ok((lhs, rhs))
    }

    /// Counts one level of nesting; the caller restores it whether or not the
    /// nested parse succeeds.
    fn enter(&mut self, token: &Token) -> Result<(), ParseError> {
        if self.depth >= self.options.max_nesting {
            return Err(ParseError::nesting_limit_exceeded(
                token,
                self.options.max_nesting,
            ));
        }
        self.depth += 1;
        Ok(())
    }
}

/// Parses a token sequence with default options.
pub fn parse(tokens: impl IntoIterator<Item = Token>) -> Result<Program, ParseError> {
    Parser::new(ParseOptions::default(), TokenStream::new(tokens)).parse_program()
}
