//! Prefix-notation parser: token stream, AST and error contracts.

pub mod ast;
pub mod error;
pub mod parser;
pub mod token_stream;

pub use ast::{Action, BinaryOp, Expr, Program, UnaryOp};
pub use error::{ParseError, ParseErrorKind};
pub use parser::{
    ASSIGN_MARKER, DEFAULT_MAX_NESTING, PRINT_MARKER, ParseOptions, Parser, is_identifier, parse,
    parse_literal,
};
pub use token_stream::TokenStream;
