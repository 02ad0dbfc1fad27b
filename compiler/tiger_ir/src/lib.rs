//! Tiger IR - Resolved AST Types
//!
//! This crate contains the data structures shared by the Tiger core consumers:
//! - Source locations for diagnostics
//! - Names for interned identifiers and string contents
//! - AST nodes (`Expr`, `Decl`) stored in a flat arena
//! - The dispatch protocol (`Visitor`, `accept`) every consumer implements
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: Strings → Name(u32)
//! - **Flatten Everything**: No `Box<Expr>`, use `ExprId(u32)` / `DeclId(u32)` indices
//! - **Links Are Lookups**: resolver links (identifier → declaration,
//!   call → function, break → loop) are `Option` indices, never ownership
//!
//! Trees are built by the external parser through [`AstBuilder`], decorated
//! by the external resolver, and read-only afterwards.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod builder;
mod expr_id;
mod interner;
mod location;
mod name;
mod violation;
pub mod visitor;

pub use arena::Ast;
pub use ast::{BinaryOp, Decl, DeclKind, Expr, ExprKind, FunDecl, NodeKind, Type, VarDecl};
pub use builder::AstBuilder;
pub use expr_id::{DeclId, DeclRange, ExprId, ExprRange, NodeId};
pub use interner::{InternError, StringInterner};
pub use location::Location;
pub use name::Name;
pub use violation::Violation;
pub use visitor::{accept, accept_decl, accept_expr, Visitor};

static_assert_size!(ExprId, 4);
static_assert_size!(DeclId, 4);
static_assert_size!(Name, 4);
