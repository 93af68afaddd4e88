//! Tree-walking interpreter: executes the AST directly.

use tracing::debug;

use crate::parser::ast::{Action, Expr, Program};
use crate::runtime::{Execution, RuntimeError, SymbolTable, apply_binary, apply_unary};

/// Direct executor of parsed actions.
#[derive(Debug, Default)]
pub struct Interpreter {
    symbols: SymbolTable,
    output: Vec<i32>,
}

impl Interpreter {
    /// Creates an interpreter with an empty symbol table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes every action of `program` in order, stopping at the first error.
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for action in program {
            self.execute(action)?;
        }
        debug!(
            printed = self.output.len(),
            variables = self.symbols.len(),
            "interpreted program"
        );
        Ok(())
    }

    /// Executes one action.
    pub fn execute(&mut self, action: &Action) -> Result<(), RuntimeError> {
        match action {
            Action::Assign { name, expr } => {
                let value = self.evaluate(expr)?;
                self.symbols.set(name.as_str(), value);
            }
            Action::Print { expr } => {
                let value = self.evaluate(expr)?;
                self.output.push(value);
            }
        }
        Ok(())
    }

    /// Evaluates an expression against the current bindings.
    ///
    /// Binary operands are evaluated left first.
    pub fn evaluate(&self, expr: &Expr) -> Result<i32, RuntimeError> {
        match expr {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => self.symbols.get(name),
            Expr::Unary { op, operand } => apply_unary(*op, self.evaluate(operand)?),
            Expr::Binary { op, lhs, rhs } => {
                let left = self.evaluate(lhs)?;
                let right = self.evaluate(rhs)?;
                apply_binary(*op, left, right)
            }
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn output(&self) -> &[i32] {
        &self.output
    }

    /// Consumes the interpreter, returning what it printed and bound.
    pub fn into_execution(self) -> Execution {
        Execution {
            output: self.output,
            symbols: self.symbols,
        }
    }
}

/// Interprets `program` from a fresh symbol table.
pub fn interpret(program: &Program) -> Result<Execution, RuntimeError> {
    let mut interpreter = Interpreter::new();
    interpreter.run(program)?;
    Ok(interpreter.into_execution())
}
