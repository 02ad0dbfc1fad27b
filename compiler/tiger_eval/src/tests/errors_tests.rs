//! Tests for error construction and display.

use crate::errors::{division_by_zero, empty_sequence, unsupported, EvalErrorKind};
use tiger_ir::{Location, NodeKind, Violation};

#[test]
fn test_unsupported_names_construct() {
    let err = unsupported(NodeKind::WhileLoop);
    assert_eq!(
        err.kind,
        EvalErrorKind::UnsupportedConstruct {
            construct: NodeKind::WhileLoop
        }
    );
    assert_eq!(err.construct(), Some(NodeKind::WhileLoop));
    assert_eq!(err.violation(), None);
    assert_eq!(err.to_string(), "cannot evaluate while loop");
}

#[test]
fn test_invariant_violation_messages() {
    assert_eq!(division_by_zero().to_string(), "division by zero");
    assert_eq!(empty_sequence().to_string(), "empty sequence expression");
    assert_eq!(empty_sequence().violation(), Some(Violation::EmptySequence));
    assert_eq!(empty_sequence().construct(), None);
}

#[test]
fn test_display_includes_location() {
    let err = division_by_zero().with_loc(Location::new(3, 7));
    assert_eq!(err.loc, Some(Location::new(3, 7)));
    assert_eq!(err.to_string(), "3:7: division by zero");

    let synthesized = division_by_zero().with_loc(Location::DUMMY);
    assert_eq!(synthesized.to_string(), "division by zero");
}
