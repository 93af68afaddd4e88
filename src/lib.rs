//! Library entrypoint for `treevm`.
//!
//! A prefix-notation language with two execution paths over the same AST:
//! - `lexer` splits program text into whitespace-delimited tokens.
//! - `parser` builds the action/expression tree.
//! - `interp` walks the tree directly.
//! - `ir` emits stack-machine instructions and assembles instruction text.
//! - `vm` executes assembled instructions.
//!
//! Both paths share `runtime` arithmetic and must agree on printed output,
//! final bindings, and error kind for every program.

pub mod error;
pub mod interp;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod runtime;
pub mod vm;

pub use error::{Error, ErrorKind, Result};
pub use interp::interpret;
pub use ir::generate;
pub use lexer::InputMode;
pub use parser::{ParseError, Program};
pub use runtime::{Execution, RuntimeError, SymbolTable};

use parser::{ParseOptions, Parser, TokenStream};

/// Tokenizes and parses program text.
pub fn parse_source(source: &str, mode: InputMode) -> std::result::Result<Program, ParseError> {
    Parser::new(ParseOptions::default(), TokenStream::from_source(source, mode)).parse_program()
}

/// Assembles instruction text and runs it on a fresh machine.
pub fn assemble_and_run(text: &str, mode: InputMode) -> Result<Execution> {
    let instructions = ir::assemble(text, mode)?;
    Ok(vm::execute(instructions)?)
}

/// Parses `source`, then compiles and runs it on the machine.
pub fn compile_and_run(source: &str, mode: InputMode) -> Result<Execution> {
    let program = parse_source(source, mode)?;
    assemble_and_run(&generate(&program), InputMode::File)
}
