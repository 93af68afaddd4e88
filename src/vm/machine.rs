//! Stack machine executing assembled instruction sequences.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::ir::bytecode::Instruction;
use crate::parser::ast::{BinaryOp, UnaryOp};
use crate::runtime::{Execution, RuntimeError, SymbolTable, apply_binary, apply_unary};
use crate::vm::stack::OperandStack;

/// Default maximum operand stack depth.
const DEFAULT_MAX_STACK_DEPTH: usize = 65_536;

/// Machine resource limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MachineOptions {
    /// Maximum operand stack depth.
    pub max_stack_depth: usize,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            max_stack_depth: DEFAULT_MAX_STACK_DEPTH,
        }
    }
}

/// Straight-line stack machine with a private stack and symbol table.
pub struct Machine {
    program: Arc<[Instruction]>,
    pc: usize,
    stack: OperandStack,
    symbols: SymbolTable,
    output: Vec<i32>,
}

impl Machine {
    /// Creates a machine with default limits.
    pub fn new(program: impl Into<Arc<[Instruction]>>) -> Self {
        Self::with_options(program, MachineOptions::default())
    }

    /// Creates a machine with explicit limits.
    pub fn with_options(program: impl Into<Arc<[Instruction]>>, options: MachineOptions) -> Self {
        Self {
            program: program.into(),
            pc: 0,
            stack: OperandStack::new(options.max_stack_depth),
            symbols: SymbolTable::new(),
            output: Vec::new(),
        }
    }

    /// Returns the loaded instructions.
    pub fn program(&self) -> &[Instruction] {
        &self.program
    }

    /// Returns the index of the next instruction to execute.
    pub fn pc(&self) -> usize {
        self.pc
    }

    /// Returns `true` once every instruction has executed.
    pub fn is_halted(&self) -> bool {
        self.pc >= self.program.len()
    }

    /// Runs to the end of the program, stopping at the first error.
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        while self.step()? {}
        debug!(
            printed = self.output.len(),
            variables = self.symbols.len(),
            stack_depth = self.stack.depth(),
            "machine halted"
        );
        Ok(())
    }

    /// Executes one instruction. Returns `false` when already halted.
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        let program = Arc::clone(&self.program);
        let Some(instruction) = program.get(self.pc) else {
            return Ok(false);
        };
        trace!(pc = self.pc, %instruction, depth = self.stack.depth(), "execute");
        self.pc += 1;

        match instruction {
            Instruction::Push(value) => self.stack.push(*value)?,
            Instruction::Add => self.binary(BinaryOp::Add)?,
            Instruction::Sub => self.binary(BinaryOp::Sub)?,
            Instruction::Mul => self.binary(BinaryOp::Mul)?,
            Instruction::Div => self.binary(BinaryOp::Div)?,
            Instruction::Mod => self.binary(BinaryOp::Mod)?,
            Instruction::Neg => self.unary(UnaryOp::Negate)?,
            Instruction::Sqrt => self.unary(UnaryOp::Sqrt)?,
            Instruction::Print => {
                let value = self.stack.pop()?;
                self.output.push(value);
            }
            Instruction::Load(name) => {
                let value = self.symbols.get(name)?;
                self.stack.push(value)?;
            }
            Instruction::Store(name) => {
                let value = self.stack.pop()?;
                self.symbols.set(name.as_str(), value);
            }
        }
        Ok(true)
    }

    /// Pops the right operand, then the left, and pushes `lhs op rhs`.
    fn binary(&mut self, op: BinaryOp) -> Result<(), RuntimeError> {
        let rhs = self.stack.pop()?;
        let lhs = self.stack.pop()?;
        self.stack.push(apply_binary(op, lhs, rhs)?)
    }

    fn unary(&mut self, op: UnaryOp) -> Result<(), RuntimeError> {
        let operand = self.stack.pop()?;
        self.stack.push(apply_unary(op, operand)?)
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn output(&self) -> &[i32] {
        &self.output
    }

    /// Consumes the machine, returning what it printed and bound.
    pub fn into_execution(self) -> Execution {
        Execution {
            output: self.output,
            symbols: self.symbols,
        }
    }
}

/// Runs `program` on a fresh machine.
pub fn execute(program: impl Into<Arc<[Instruction]>>) -> Result<Execution, RuntimeError> {
    let mut machine = Machine::new(program);
    machine.run()?;
    Ok(machine.into_execution())
}
