//! Crate-level error aggregate.

use thiserror::Error;

use crate::ir::{AssembleError, AssembleErrorKind};
use crate::parser::{ParseError, ParseErrorKind};
use crate::runtime::{RuntimeError, RuntimeErrorKind};

pub type Result<T> = std::result::Result<T, Error>;

/// Any failure of the pipeline. Every phase fails fast; there are no partial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Assemble(#[from] AssembleError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Flat error category across all phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IllegalAction,
    IllegalOperator,
    IllegalTarget,
    PrematureEnd,
    NestingLimitExceeded,
    IllegalInstruction,
    IllegalOperand,
    DivideByZero,
    NegativeSquareRoot,
    Uninitialized,
    StackUnderflow,
    StackOverflow,
}

impl Error {
    /// Returns the flat category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(error) => error.kind.into(),
            Self::Assemble(error) => error.kind.into(),
            Self::Runtime(error) => (&error.kind).into(),
        }
    }
}

impl From<ParseErrorKind> for ErrorKind {
    fn from(kind: ParseErrorKind) -> Self {
        match kind {
            ParseErrorKind::IllegalAction => Self::IllegalAction,
            ParseErrorKind::IllegalOperator => Self::IllegalOperator,
            ParseErrorKind::IllegalTarget => Self::IllegalTarget,
            ParseErrorKind::PrematureEnd => Self::PrematureEnd,
            ParseErrorKind::NestingLimitExceeded => Self::NestingLimitExceeded,
        }
    }
}

impl From<AssembleErrorKind> for ErrorKind {
    fn from(kind: AssembleErrorKind) -> Self {
        match kind {
            AssembleErrorKind::IllegalInstruction => Self::IllegalInstruction,
            AssembleErrorKind::IllegalOperand => Self::IllegalOperand,
            AssembleErrorKind::PrematureEnd => Self::PrematureEnd,
        }
    }
}

impl From<&RuntimeErrorKind> for ErrorKind {
    fn from(kind: &RuntimeErrorKind) -> Self {
        match kind {
            RuntimeErrorKind::DivideByZero => Self::DivideByZero,
            RuntimeErrorKind::NegativeSquareRoot => Self::NegativeSquareRoot,
            RuntimeErrorKind::Uninitialized(_) => Self::Uninitialized,
            RuntimeErrorKind::StackUnderflow => Self::StackUnderflow,
            RuntimeErrorKind::StackOverflow => Self::StackOverflow,
        }
    }
}
