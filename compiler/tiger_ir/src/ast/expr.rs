//! Expression Types
//!
//! Core expression nodes and variants.
//!
//! All children are indices into the owning [`Ast`](crate::Ast). Resolver
//! links (`decl`, `target`) are lookups: they never own the node they name.

use std::fmt;

use super::kind::NodeKind;
use super::operators::BinaryOp;
use crate::{DeclId, DeclRange, ExprId, ExprRange, Location, Name};

/// Expression node.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub loc: Location,
}

impl Expr {
    pub fn new(kind: ExprKind, loc: Location) -> Self {
        Expr { kind, loc }
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.loc)
    }
}

/// Expression variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    /// Integer literal: 42
    Int(i32),

    /// String literal (contents interned, unescaped)
    ///
    /// Contents are UTF-8 text. A parser decoding a `\ddd` escape above 127
    /// stores the code point with that value (`\255` becomes `U+00FF`); raw
    /// non-UTF-8 byte strings cannot be represented.
    String(Name),

    /// Binary operation: left op right
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },

    /// Sequence: (e1; e2; ...)
    Sequence(ExprRange),

    /// Let: let decls in body end
    Let { decls: DeclRange, body: ExprRange },

    /// Variable reference.
    ///
    /// `depth` is the lexical depth of the use site; `decl` is filled in by
    /// the resolver.
    Ident {
        name: Name,
        decl: Option<DeclId>,
        depth: u32,
    },

    /// Conditional: if cond then t else e
    If {
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },

    /// Function call: func(args)
    Call {
        func: Name,
        args: ExprRange,
        decl: Option<DeclId>,
    },

    /// While loop: while cond do body
    While { cond: ExprId, body: ExprId },

    /// For loop: for var := low to high do body
    ///
    /// `low` is the initializer of the loop variable `var`.
    For {
        var: DeclId,
        high: ExprId,
        body: ExprId,
    },

    /// Break, with the enclosing loop once resolved.
    Break { target: Option<ExprId> },

    /// Assignment: lhs := rhs
    Assign { lhs: ExprId, rhs: ExprId },
}

impl ExprKind {
    /// The node-kind tag of this expression.
    pub const fn node_kind(&self) -> NodeKind {
        match self {
            ExprKind::Int(_) => NodeKind::IntegerLiteral,
            ExprKind::String(_) => NodeKind::StringLiteral,
            ExprKind::Binary { .. } => NodeKind::BinaryOperator,
            ExprKind::Sequence(_) => NodeKind::Sequence,
            ExprKind::Let { .. } => NodeKind::Let,
            ExprKind::Ident { .. } => NodeKind::Identifier,
            ExprKind::If { .. } => NodeKind::IfThenElse,
            ExprKind::Call { .. } => NodeKind::FunCall,
            ExprKind::While { .. } => NodeKind::WhileLoop,
            ExprKind::For { .. } => NodeKind::ForLoop,
            ExprKind::Break { .. } => NodeKind::Break,
            ExprKind::Assign { .. } => NodeKind::Assign,
        }
    }

    /// Check if this expression is a loop a `break` can target.
    pub const fn is_loop(&self) -> bool {
        matches!(self, ExprKind::While { .. } | ExprKind::For { .. })
    }
}
