//! Stack-machine instruction set and its text form.

use std::fmt;

use crate::parser::ast::{BinaryOp, UnaryOp};

/// One straight-line stack-machine instruction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Pushes an immediate integer.
    Push(i32),
    /// Pops `b`, pops `a`, pushes `a + b`.
    Add,
    /// Pops `b`, pops `a`, pushes `a - b`.
    Sub,
    /// Pops `b`, pops `a`, pushes `a * b`.
    Mul,
    /// Pops `b`, pops `a`, pushes `a / b`.
    Div,
    /// Pops `b`, pops `a`, pushes `a % b`.
    Mod,
    /// Pops one value, pushes its negation.
    Neg,
    /// Pops one value, pushes its integer square root.
    Sqrt,
    /// Pops one value and prints it.
    Print,
    /// Pushes the value bound to a variable.
    Load(String),
    /// Pops one value and binds it to a variable.
    Store(String),
}

/// Instruction mnemonics as they appear in instruction text.
pub mod mnemonic {
    pub const PUSH: &str = "PUSH";
    pub const ADD: &str = "ADD";
    pub const SUB: &str = "SUB";
    pub const MUL: &str = "MUL";
    pub const DIV: &str = "DIV";
    pub const MOD: &str = "MOD";
    pub const NEG: &str = "NEG";
    pub const SQRT: &str = "SQRT";
    pub const PRINT: &str = "PRINT";
    pub const LOAD: &str = "LOAD";
    pub const STORE: &str = "STORE";
}

/// Every legal mnemonic, in declaration order.
pub const MNEMONICS: [&str; 11] = [
    mnemonic::PUSH,
    mnemonic::ADD,
    mnemonic::SUB,
    mnemonic::MUL,
    mnemonic::DIV,
    mnemonic::MOD,
    mnemonic::NEG,
    mnemonic::SQRT,
    mnemonic::PRINT,
    mnemonic::LOAD,
    mnemonic::STORE,
];

/// Instructions written as a bare mnemonic.
const OPERAND_FREE: [Instruction; 8] = [
    Instruction::Add,
    Instruction::Sub,
    Instruction::Mul,
    Instruction::Div,
    Instruction::Mod,
    Instruction::Neg,
    Instruction::Sqrt,
    Instruction::Print,
];

impl Instruction {
    /// Returns the text mnemonic.
    pub fn mnemonic(&self) -> &'static str {
        match self {
            Self::Push(_) => mnemonic::PUSH,
            Self::Add => mnemonic::ADD,
            Self::Sub => mnemonic::SUB,
            Self::Mul => mnemonic::MUL,
            Self::Div => mnemonic::DIV,
            Self::Mod => mnemonic::MOD,
            Self::Neg => mnemonic::NEG,
            Self::Sqrt => mnemonic::SQRT,
            Self::Print => mnemonic::PRINT,
            Self::Load(_) => mnemonic::LOAD,
            Self::Store(_) => mnemonic::STORE,
        }
    }

    /// Returns the operand-free instruction spelled `text`, if any.
    pub fn operand_free(text: &str) -> Option<Self> {
        OPERAND_FREE
            .into_iter()
            .find(|instruction| instruction.mnemonic() == text)
    }

    /// Returns the instruction computing `op`.
    pub fn for_unary(op: UnaryOp) -> Self {
        match op {
            UnaryOp::Negate => Self::Neg,
            UnaryOp::Sqrt => Self::Sqrt,
        }
    }

    /// Returns the instruction computing `op`.
    pub fn for_binary(op: BinaryOp) -> Self {
        match op {
            BinaryOp::Add => Self::Add,
            BinaryOp::Sub => Self::Sub,
            BinaryOp::Mul => Self::Mul,
            BinaryOp::Div => Self::Div,
            BinaryOp::Mod => Self::Mod,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(value) => write!(f, "PUSH {value}"),
            Self::Load(name) => write!(f, "LOAD {name}"),
            Self::Store(name) => write!(f, "STORE {name}"),
            other => f.write_str(other.mnemonic()),
        }
    }
}

/// Renders instructions one per line, each newline-terminated.
pub fn render(instructions: &[Instruction]) -> String {
    let mut text = String::new();
    for instruction in instructions {
        text.push_str(&instruction.to_string());
        text.push('\n');
    }
    text
}
