//! Declaration Types
//!
//! Variable and function declarations. Both share a header (`Decl`) carrying
//! what the resolver and type checker attach: lexical depth, semantic type,
//! and the escape flag.

use super::kind::NodeKind;
use super::types::Type;
use crate::{DeclRange, ExprId, Location, Name};

/// Declaration node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Decl {
    pub name: Name,
    pub loc: Location,
    /// Lexical depth of the declaring scope.
    pub depth: u32,
    /// Type name as written in source (`var x: int := ...`).
    pub type_name: Option<Name>,
    /// Type assigned by the type checker.
    pub ty: Type,
    /// Set when a nested function captures this declaration.
    pub escapes: bool,
    pub kind: DeclKind,
}

impl Decl {
    /// The node-kind tag of this declaration.
    pub const fn node_kind(&self) -> NodeKind {
        match self.kind {
            DeclKind::Var(_) => NodeKind::VarDecl,
            DeclKind::Fun(_) => NodeKind::FunDecl,
        }
    }
}

/// Declaration variants.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum DeclKind {
    Var(VarDecl),
    Fun(FunDecl),
}

/// Variable declaration.
///
/// Function parameters are variable declarations without an initializer.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct VarDecl {
    pub init: Option<ExprId>,
}

/// Function declaration.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FunDecl {
    pub params: DeclRange,
    pub body: ExprId,
    /// Symbol name chosen by the lowering pass, once known.
    pub external_name: Option<Name>,
}
