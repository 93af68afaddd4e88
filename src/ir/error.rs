//! Assembler error contracts.

use std::fmt;

/// Stable assembler error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssembleErrorKind {
    /// The mnemonic is not part of the instruction set.
    IllegalInstruction,
    /// An operand is malformed, or present where none is taken.
    IllegalOperand,
    /// The line ends before a required operand.
    PrematureEnd,
}

impl fmt::Display for AssembleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalInstruction => write!(f, "illegal instruction"),
            Self::IllegalOperand => write!(f, "illegal operand"),
            Self::PrematureEnd => write!(f, "premature end of instruction"),
        }
    }
}

/// Assembler error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembleError {
    /// Error category.
    pub kind: AssembleErrorKind,
    /// 1-based line of the offending instruction.
    pub line: usize,
    /// Offending mnemonic, operand or line text.
    pub found: String,
}

impl AssembleError {
    /// Creates an assembler error.
    pub fn new(kind: AssembleErrorKind, line: usize, found: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            found: found.into(),
        }
    }

    /// Creates an `IllegalInstruction` error.
    pub fn illegal_instruction(line: usize, mnemonic: impl Into<String>) -> Self {
        Self::new(AssembleErrorKind::IllegalInstruction, line, mnemonic)
    }

    /// Creates an `IllegalOperand` error.
    pub fn illegal_operand(line: usize, operand: impl Into<String>) -> Self {
        Self::new(AssembleErrorKind::IllegalOperand, line, operand)
    }

    /// Creates a `PrematureEnd` error.
    pub fn premature_end(line: usize, mnemonic: impl Into<String>) -> Self {
        Self::new(AssembleErrorKind::PrematureEnd, line, mnemonic)
    }
}

impl fmt::Display for AssembleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: `{}` (line {})", self.kind, self.found, self.line)
    }
}

impl std::error::Error for AssembleError {}
