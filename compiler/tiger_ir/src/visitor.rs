//! Dispatch Protocol
//!
//! Every consumer of the tree (evaluator, renderer) implements [`Visitor`]:
//! one required handler per node kind, no defaults. [`accept`] matches the
//! node's kind exhaustively and calls exactly one handler, so callers never
//! inspect kinds themselves and a new kind fails to build until every
//! visitor handles it.
//!
//! # Shapes
//!
//! The associated `Output` type selects the shape: a value-producing visitor
//! returns its result (`Result<i32, _>` for the evaluator), a side-effecting
//! one returns only success or failure (`Result<(), _>` for the renderer).
//!
//! Handlers receive the node's payload already destructured. Children are
//! ids; handlers recurse by calling [`accept_expr`] / [`accept_decl`].

use crate::ast::{Decl, DeclKind, ExprKind, FunDecl, VarDecl};
use crate::{Ast, BinaryOp, DeclId, ExprId, Location, Name, NodeId};

/// Per-kind handlers for one traversal.
pub trait Visitor<'ast> {
    /// What one visit produces.
    type Output;

    fn visit_integer_literal(&mut self, value: i32, loc: Location) -> Self::Output;

    fn visit_string_literal(&mut self, value: Name, loc: Location) -> Self::Output;

    fn visit_binary_operator(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        loc: Location,
    ) -> Self::Output;

    fn visit_sequence(&mut self, exprs: &'ast [ExprId], loc: Location) -> Self::Output;

    fn visit_let(
        &mut self,
        decls: &'ast [DeclId],
        body: &'ast [ExprId],
        loc: Location,
    ) -> Self::Output;

    fn visit_identifier(
        &mut self,
        name: Name,
        decl: Option<DeclId>,
        depth: u32,
        loc: Location,
    ) -> Self::Output;

    fn visit_if_then_else(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
        loc: Location,
    ) -> Self::Output;

    fn visit_var_decl(&mut self, decl: &'ast Decl, var: &'ast VarDecl) -> Self::Output;

    fn visit_fun_decl(&mut self, decl: &'ast Decl, fun: &'ast FunDecl) -> Self::Output;

    fn visit_fun_call(
        &mut self,
        func: Name,
        args: &'ast [ExprId],
        decl: Option<DeclId>,
        loc: Location,
    ) -> Self::Output;

    fn visit_while_loop(&mut self, cond: ExprId, body: ExprId, loc: Location) -> Self::Output;

    fn visit_for_loop(
        &mut self,
        var: DeclId,
        high: ExprId,
        body: ExprId,
        loc: Location,
    ) -> Self::Output;

    fn visit_break(&mut self, target: Option<ExprId>, loc: Location) -> Self::Output;

    fn visit_assign(&mut self, lhs: ExprId, rhs: ExprId, loc: Location) -> Self::Output;
}

/// Dispatch any node to the handler matching its kind.
pub fn accept<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    node: NodeId,
) -> V::Output {
    match node {
        NodeId::Expr(id) => accept_expr(visitor, ast, id),
        NodeId::Decl(id) => accept_decl(visitor, ast, id),
    }
}

/// Dispatch an expression to the handler matching its kind.
pub fn accept_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    id: ExprId,
) -> V::Output {
    let expr = ast.expr(id);
    let loc = expr.loc;
    match expr.kind {
        ExprKind::Int(value) => visitor.visit_integer_literal(value, loc),
        ExprKind::String(value) => visitor.visit_string_literal(value, loc),
        ExprKind::Binary { op, left, right } => visitor.visit_binary_operator(op, left, right, loc),
        ExprKind::Sequence(exprs) => visitor.visit_sequence(ast.expr_list(exprs), loc),
        ExprKind::Let { decls, body } => {
            visitor.visit_let(ast.decl_list(decls), ast.expr_list(body), loc)
        }
        ExprKind::Ident { name, decl, depth } => visitor.visit_identifier(name, decl, depth, loc),
        ExprKind::If {
            cond,
            then_branch,
            else_branch,
        } => visitor.visit_if_then_else(cond, then_branch, else_branch, loc),
        ExprKind::Call { func, args, decl } => {
            visitor.visit_fun_call(func, ast.expr_list(args), decl, loc)
        }
        ExprKind::While { cond, body } => visitor.visit_while_loop(cond, body, loc),
        ExprKind::For { var, high, body } => visitor.visit_for_loop(var, high, body, loc),
        ExprKind::Break { target } => visitor.visit_break(target, loc),
        ExprKind::Assign { lhs, rhs } => visitor.visit_assign(lhs, rhs, loc),
    }
}

/// Dispatch a declaration to the handler matching its kind.
pub fn accept_decl<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    ast: &'ast Ast,
    id: DeclId,
) -> V::Output {
    let decl = ast.decl(id);
    match &decl.kind {
        DeclKind::Var(var) => visitor.visit_var_decl(decl, var),
        DeclKind::Fun(fun) => visitor.visit_fun_decl(decl, fun),
    }
}
