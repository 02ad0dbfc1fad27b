//! Error types for rendering.
//!
//! A render either completes or fails as a whole; nothing is written to the
//! caller's sink after an error.

use std::fmt;
use std::io;

use tiger_ir::{Location, Violation};

/// Result of rendering one node.
pub type RenderResult = Result<(), RenderError>;

/// Rendering error.
#[derive(Debug)]
pub enum RenderError {
    /// A structural precondition does not hold.
    InvariantViolation { violation: Violation, loc: Location },
    /// The output sink rejected the rendered text.
    Io(io::Error),
}

impl RenderError {
    /// A structural precondition does not hold at `loc`.
    #[cold]
    pub fn invariant(violation: Violation, loc: Location) -> Self {
        RenderError::InvariantViolation { violation, loc }
    }

    /// The broken invariant, if this is an `InvariantViolation` error.
    pub fn violation(&self) -> Option<Violation> {
        match self {
            RenderError::InvariantViolation { violation, .. } => Some(*violation),
            RenderError::Io(_) => None,
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvariantViolation { violation, loc } if loc.is_dummy() => {
                write!(f, "internal error: {violation}")
            }
            RenderError::InvariantViolation { violation, loc } => {
                write!(f, "{loc}: internal error: {violation}")
            }
            RenderError::Io(err) => write!(f, "failed to write rendered output: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::InvariantViolation { .. } => None,
        }
    }
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        RenderError::Io(err)
    }
}
