//! AST to instruction emission.
//!
//! Emission never executes anything. Operands are emitted before their
//! operator, left before right, so the machine pops the right operand first
//! and sees the same operand order the interpreter does.

use tracing::debug;

use crate::ir::bytecode::{Instruction, render};
use crate::parser::ast::{Action, Expr, Program};

/// Accumulates instructions for a program.
#[derive(Debug, Clone, Default)]
pub struct CodeGenerator {
    instructions: Vec<Instruction>,
}

impl CodeGenerator {
    /// Creates an empty generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits every action of `program` in order.
    pub fn emit_program(&mut self, program: &Program) {
        for action in program {
            self.emit_action(action);
        }
    }

    /// Emits one action.
    pub fn emit_action(&mut self, action: &Action) {
        match action {
            Action::Assign { name, expr } => {
                self.emit_expr(expr);
                self.instructions.push(Instruction::Store(name.clone()));
            }
            Action::Print { expr } => {
                self.emit_expr(expr);
                self.instructions.push(Instruction::Print);
            }
        }
    }

    /// Emits code leaving the value of `expr` on top of the stack.
    pub fn emit_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Constant(value) => self.instructions.push(Instruction::Push(*value)),
            Expr::Variable(name) => self.instructions.push(Instruction::Load(name.clone())),
            Expr::Unary { op, operand } => {
                self.emit_expr(operand);
                self.instructions.push(Instruction::for_unary(*op));
            }
            Expr::Binary { op, lhs, rhs } => {
                self.emit_expr(lhs);
                self.emit_expr(rhs);
                self.instructions.push(Instruction::for_binary(*op));
            }
        }
    }

    /// Returns emitted instructions so far.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Consumes the generator, returning its instructions.
    pub fn finish(self) -> Vec<Instruction> {
        self.instructions
    }
}

/// Emits the instruction sequence for `program`.
pub fn emit(program: &Program) -> Vec<Instruction> {
    let mut generator = CodeGenerator::new();
    generator.emit_program(program);
    debug!(
        actions = program.len(),
        instructions = generator.instructions().len(),
        "generated instructions"
    );
    generator.finish()
}

/// Emits `program` as instruction text, one instruction per line.
pub fn generate(program: &Program) -> String {
    render(&emit(program))
}
