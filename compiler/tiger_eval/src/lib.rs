#![deny(clippy::arithmetic_side_effects)]
//! Tiger Eval - Constant evaluator for resolved expression trees.
//!
//! Computes the 32-bit integer value of a side-effect-free subset of the
//! language: integer literals, binary operators, sequences, and
//! `if`-`then`-`else`. The evaluator keeps no binding environment, so every
//! construct that needs variable state (identifiers, `let`, calls, loops,
//! assignment, declarations) is rejected with
//! [`EvalErrorKind::UnsupportedConstruct`] rather than half-supported.
//!
//! # Architecture
//!
//! - [`Evaluator`]: a [`tiger_ir::Visitor`] whose output is [`EvalResult`]
//! - [`evaluate_binary`]: direct enum-based operator dispatch
//! - [`errors`]: error type and constructors

pub mod errors;
mod evaluator;
mod operators;

pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use evaluator::{evaluate, Evaluator};
pub use operators::evaluate_binary;

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
