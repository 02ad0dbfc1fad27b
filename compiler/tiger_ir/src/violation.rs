//! Structural invariants a consumer may find broken while walking a tree.
//!
//! These are independent of which node kinds a consumer supports: the
//! evaluator and the renderer both report them, each wrapped in its own
//! error type.

use std::fmt;

/// A broken structural precondition.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Violation {
    /// A sequence expression with no elements.
    EmptySequence,
    /// A `let` whose body holds no expressions.
    EmptyLetBody,
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// A `for` loop variable without its lower-bound initializer.
    MissingLoopBound,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptySequence => write!(f, "empty sequence expression"),
            Violation::EmptyLetBody => write!(f, "empty let body"),
            Violation::DivisionByZero => write!(f, "division by zero"),
            Violation::MissingLoopBound => {
                write!(f, "for loop variable has no initial value")
            }
        }
    }
}
