//! Runtime error contracts shared by the interpreter and the stack machine.

use std::fmt;

/// Stable runtime error categories.
///
/// Both execution paths report failures with these kinds, so the same program
/// fails the same way whichever path runs it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RuntimeErrorKind {
    /// Division or remainder with a zero right operand.
    DivideByZero,
    /// Square root of a negative operand.
    NegativeSquareRoot,
    /// Variable read before any assignment.
    Uninitialized(String),
    /// Pop on an empty operand stack.
    StackUnderflow,
    /// Push beyond the configured operand stack depth.
    StackOverflow,
}

impl fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "divide by zero"),
            Self::NegativeSquareRoot => write!(f, "negative square root"),
            Self::Uninitialized(name) => write!(f, "uninitialized variable: {name}"),
            Self::StackUnderflow => write!(f, "stack underflow"),
            Self::StackOverflow => write!(f, "stack overflow"),
        }
    }
}

/// Runtime error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeError {
    /// Error category.
    pub kind: RuntimeErrorKind,
    /// Human-readable error message.
    pub message: String,
}

impl RuntimeError {
    /// Creates a runtime error.
    pub fn new(kind: RuntimeErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Creates a `DivideByZero` error.
    pub fn divide_by_zero() -> Self {
        Self::new(RuntimeErrorKind::DivideByZero, "divide by zero")
    }

    /// Creates a `NegativeSquareRoot` error.
    pub fn negative_square_root(operand: i32) -> Self {
        Self::new(
            RuntimeErrorKind::NegativeSquareRoot,
            format!("square root of negative value {operand}"),
        )
    }

    /// Creates an `Uninitialized` error.
    pub fn uninitialized(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("{name}: uninitialized variable");
        Self::new(RuntimeErrorKind::Uninitialized(name), message)
    }

    /// Creates a `StackUnderflow` error.
    pub fn stack_underflow() -> Self {
        Self::new(RuntimeErrorKind::StackUnderflow, "stack underflow")
    }

    /// Creates a `StackOverflow` error.
    pub fn stack_overflow(limit: usize) -> Self {
        Self::new(
            RuntimeErrorKind::StackOverflow,
            format!("stack overflow (limit {limit})"),
        )
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RuntimeError {}
