//! The closed set of node kinds.

use std::fmt;

/// Kind tag of an AST node.
///
/// Every consumer handles exactly this set; see [`Visitor`](crate::Visitor).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    IntegerLiteral,
    StringLiteral,
    BinaryOperator,
    Sequence,
    Let,
    Identifier,
    IfThenElse,
    VarDecl,
    FunDecl,
    FunCall,
    WhileLoop,
    ForLoop,
    Break,
    Assign,
}

impl NodeKind {
    /// Human-readable construct name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            NodeKind::IntegerLiteral => "integer literal",
            NodeKind::StringLiteral => "string literal",
            NodeKind::BinaryOperator => "binary operator",
            NodeKind::Sequence => "sequence expression",
            NodeKind::Let => "let expression",
            NodeKind::Identifier => "identifier",
            NodeKind::IfThenElse => "if-then-else expression",
            NodeKind::VarDecl => "variable declaration",
            NodeKind::FunDecl => "function declaration",
            NodeKind::FunCall => "function call",
            NodeKind::WhileLoop => "while loop",
            NodeKind::ForLoop => "for loop",
            NodeKind::Break => "break statement",
            NodeKind::Assign => "assignment",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
