//! Error types for evaluation.
//!
//! `EvalErrorKind` carries the structured category; the constructor
//! functions below are the public way to build errors. Both kinds abort the
//! whole `evaluate` call: there is no partial result and no retry.

use std::fmt;

use tiger_ir::{Location, NodeKind, Violation};

/// Result of evaluation.
pub type EvalResult = Result<i32, EvalError>;

/// Typed error category.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// The node kind is outside the evaluable subset.
    UnsupportedConstruct { construct: NodeKind },
    /// A structural precondition does not hold.
    InvariantViolation(Violation),
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConstruct { construct } => write!(f, "cannot evaluate {construct}"),
            Self::InvariantViolation(violation) => write!(f, "{violation}"),
        }
    }
}

/// Evaluation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Location of the offending node, when known.
    pub loc: Option<Location>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        Self { kind, loc: None }
    }

    /// Attach the location of the offending node.
    #[must_use]
    pub fn with_loc(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// The unsupported construct, if this is an `UnsupportedConstruct` error.
    pub fn construct(&self) -> Option<NodeKind> {
        match self.kind {
            EvalErrorKind::UnsupportedConstruct { construct } => Some(construct),
            EvalErrorKind::InvariantViolation(_) => None,
        }
    }

    /// The broken invariant, if this is an `InvariantViolation` error.
    pub fn violation(&self) -> Option<Violation> {
        match self.kind {
            EvalErrorKind::InvariantViolation(violation) => Some(violation),
            EvalErrorKind::UnsupportedConstruct { .. } => None,
        }
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.loc {
            Some(loc) if !loc.is_dummy() => write!(f, "{loc}: {}", self.kind),
            _ => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for EvalError {}

// Constructors

/// The node kind cannot be evaluated.
#[cold]
pub fn unsupported(construct: NodeKind) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedConstruct { construct })
}

/// A structural precondition does not hold.
#[cold]
pub fn invariant_violation(violation: Violation) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvariantViolation(violation))
}

/// Integer division by zero.
#[cold]
pub fn division_by_zero() -> EvalError {
    invariant_violation(Violation::DivisionByZero)
}

/// Sequence with no elements.
#[cold]
pub fn empty_sequence() -> EvalError {
    invariant_violation(Violation::EmptySequence)
}
