//! Stack-machine instruction set: emission from the AST and text assembly.

pub mod assemble;
pub mod bytecode;
pub mod emit;
pub mod error;

pub use assemble::{assemble, assemble_line};
pub use bytecode::{Instruction, MNEMONICS, mnemonic, render};
pub use emit::{CodeGenerator, emit, generate};
pub use error::{AssembleError, AssembleErrorKind};
