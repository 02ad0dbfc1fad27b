//! Resolved semantic types.

use std::fmt;

/// Semantic type assigned by the external type checker.
///
/// `Undefined` doubles as "not yet resolved".
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Type {
    Int,
    String,
    Void,
    #[default]
    Undefined,
}

impl Type {
    /// Source-level name of this type, if it can be written in a program.
    ///
    /// `Void` and `Undefined` have no surface syntax.
    pub const fn surface_name(self) -> Option<&'static str> {
        match self {
            Type::Int => Some("int"),
            Type::String => Some("string"),
            Type::Void | Type::Undefined => None,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Int => f.write_str("int"),
            Type::String => f.write_str("string"),
            Type::Void => f.write_str("void"),
            Type::Undefined => f.write_str("undefined"),
        }
    }
}
