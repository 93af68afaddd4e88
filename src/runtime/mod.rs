//! State and arithmetic shared by the interpreter and the stack machine.

pub mod arith;
pub mod error;
pub mod symbols;

pub use arith::{apply_binary, apply_unary};
pub use error::{RuntimeError, RuntimeErrorKind};
pub use symbols::SymbolTable;

/// Observable result of running a program on either execution path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Execution {
    /// Printed values, in print order.
    pub output: Vec<i32>,
    /// Final variable bindings.
    pub symbols: SymbolTable,
}
