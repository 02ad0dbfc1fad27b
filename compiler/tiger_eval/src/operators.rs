//! Binary operator implementations for the evaluator.
//!
//! Arithmetic is two's-complement and truncating: overflow wraps, division
//! rounds toward zero. Comparisons yield 1 or 0 since the language has no
//! boolean type.

use tiger_ir::BinaryOp;

use crate::errors::{division_by_zero, EvalResult};

/// Apply `op` to two already-evaluated operands.
#[expect(
    clippy::arithmetic_side_effects,
    reason = "divisor checked nonzero; MIN / -1 wraps"
)]
pub fn evaluate_binary(left: i32, right: i32, op: BinaryOp) -> EvalResult {
    match op {
        BinaryOp::Add => Ok(left.wrapping_add(right)),
        BinaryOp::Sub => Ok(left.wrapping_sub(right)),
        BinaryOp::Mul => Ok(left.wrapping_mul(right)),
        BinaryOp::Div => {
            if right == 0 {
                Err(division_by_zero())
            } else {
                Ok(left.wrapping_div(right))
            }
        }
        BinaryOp::Eq => Ok(i32::from(left == right)),
        BinaryOp::Lt => Ok(i32::from(left < right)),
        BinaryOp::Gt => Ok(i32::from(left > right)),
        BinaryOp::Le => Ok(i32::from(left <= right)),
        BinaryOp::Ge => Ok(i32::from(left >= right)),
    }
}
