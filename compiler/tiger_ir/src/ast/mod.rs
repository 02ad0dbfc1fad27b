//! Flat AST types using arena allocation.
//!
//! - No `Box<Expr>`, use `ExprId(u32)` indices
//! - Declarations live in their own table so resolver links can target them
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes (`Expr`, `ExprKind`)
//! - `decl`: Declaration nodes (`Decl`, `VarDecl`, `FunDecl`)
//! - `operators`: Binary operators
//! - `types`: Resolved semantic types
//! - `kind`: The closed node-kind tag shared by every consumer

mod decl;
mod expr;
mod kind;
mod operators;
mod types;

pub use decl::{Decl, DeclKind, FunDecl, VarDecl};
pub use expr::{Expr, ExprKind};
pub use kind::NodeKind;
pub use operators::BinaryOp;
pub use types::Type;
