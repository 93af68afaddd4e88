//! Stack machine runtime for assembled instruction sequences.

pub mod machine;
pub mod stack;

pub use machine::{Machine, MachineOptions, execute};
pub use stack::OperandStack;
