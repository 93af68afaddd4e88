//! Bounded LIFO operand stack.

use crate::runtime::RuntimeError;

/// Operand stack owned by one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperandStack {
    values: Vec<i32>,
    max_depth: usize,
}

impl OperandStack {
    /// Creates an empty stack holding at most `max_depth` values.
    pub fn new(max_depth: usize) -> Self {
        Self {
            values: Vec::new(),
            max_depth,
        }
    }

    /// Pushes a value onto the stack.
    ///
    /// Returns `StackOverflow` if the stack has reached its depth limit.
    pub fn push(&mut self, value: i32) -> Result<(), RuntimeError> {
        if self.values.len() >= self.max_depth {
            return Err(RuntimeError::stack_overflow(self.max_depth));
        }
        self.values.push(value);
        Ok(())
    }

    /// Pops the top value.
    ///
    /// Returns `StackUnderflow` if the stack is empty.
    pub fn pop(&mut self) -> Result<i32, RuntimeError> {
        self.values.pop().ok_or_else(RuntimeError::stack_underflow)
    }

    /// Returns the top value without removing it.
    pub fn peek(&self) -> Result<i32, RuntimeError> {
        self.values
            .last()
            .copied()
            .ok_or_else(RuntimeError::stack_underflow)
    }

    /// Returns the current depth.
    pub fn depth(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the values bottom to top.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}
