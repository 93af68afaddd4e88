//! Integer arithmetic used by both execution paths.
//!
//! Values are 32-bit two's complement. Addition, subtraction, multiplication
//! and negation wrap; division and remainder truncate toward zero; square
//! root is the floor of the exact root.

use crate::parser::ast::{BinaryOp, UnaryOp};
use crate::runtime::error::RuntimeError;

/// Applies `op` to `operand`.
pub fn apply_unary(op: UnaryOp, operand: i32) -> Result<i32, RuntimeError> {
    match op {
        UnaryOp::Negate => Ok(operand.wrapping_neg()),
        UnaryOp::Sqrt => {
            if operand < 0 {
                return Err(RuntimeError::negative_square_root(operand));
            }
            Ok(operand.isqrt())
        }
    }
}

/// Applies `lhs op rhs`.
pub fn apply_binary(op: BinaryOp, lhs: i32, rhs: i32) -> Result<i32, RuntimeError> {
    match op {
        BinaryOp::Add => Ok(lhs.wrapping_add(rhs)),
        BinaryOp::Sub => Ok(lhs.wrapping_sub(rhs)),
        BinaryOp::Mul => Ok(lhs.wrapping_mul(rhs)),
        BinaryOp::Div | BinaryOp::Mod if rhs == 0 => Err(RuntimeError::divide_by_zero()),
        BinaryOp::Div => Ok(lhs.wrapping_div(rhs)),
        BinaryOp::Mod => Ok(lhs.wrapping_rem(rhs)),
    }
}
