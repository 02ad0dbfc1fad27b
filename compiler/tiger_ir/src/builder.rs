//! Tree construction for the external parser and resolver.
//!
//! The builder stamps every new node with a current location and lexical
//! depth, which the caller moves with [`AstBuilder::at`] and
//! [`AstBuilder::at_depth`]. Resolver decorations (links, escape flags,
//! types, lowered names) are applied through the `resolve_*` and `set_*`
//! methods before the tree is handed to a consumer.

use crate::ast::{Decl, DeclKind, Expr, ExprKind, FunDecl, Type, VarDecl};
use crate::{Ast, BinaryOp, DeclId, ExprId, Location};

/// Incremental builder for an [`Ast`].
#[derive(Debug, Default)]
pub struct AstBuilder {
    ast: Ast,
    loc: Location,
    depth: u32,
}

impl AstBuilder {
    /// Create a builder over an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location stamped on subsequently built nodes.
    pub fn at(&mut self, line: u32, column: u32) -> &mut Self {
        self.loc = Location::new(line, column);
        self
    }

    /// Set the lexical depth stamped on subsequent identifiers and declarations.
    pub fn at_depth(&mut self, depth: u32) -> &mut Self {
        self.depth = depth;
        self
    }

    /// Peek at the tree built so far.
    pub fn ast(&self) -> &Ast {
        &self.ast
    }

    /// Finish building and return the tree.
    pub fn finish(self) -> Ast {
        self.ast
    }

    fn expr(&mut self, kind: ExprKind) -> ExprId {
        self.ast.alloc_expr(Expr::new(kind, self.loc))
    }

    fn decl(&mut self, name: &str, type_name: Option<&str>, kind: DeclKind) -> DeclId {
        let name = self.ast.intern(name);
        let type_name = type_name.map(|t| self.ast.intern(t));
        self.ast.alloc_decl(Decl {
            name,
            loc: self.loc,
            depth: self.depth,
            type_name,
            ty: Type::Undefined,
            escapes: false,
            kind,
        })
    }

    // ===== Expressions =====

    pub fn int(&mut self, value: i32) -> ExprId {
        self.expr(ExprKind::Int(value))
    }

    /// String literal; `value` is the unescaped contents.
    pub fn string(&mut self, value: &str) -> ExprId {
        let name = self.ast.intern(value);
        self.expr(ExprKind::String(name))
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.expr(ExprKind::Binary { op, left, right })
    }

    pub fn seq(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprId {
        let range = self.ast.alloc_expr_list(exprs);
        self.expr(ExprKind::Sequence(range))
    }

    pub fn let_in(
        &mut self,
        decls: impl IntoIterator<Item = DeclId>,
        body: impl IntoIterator<Item = ExprId>,
    ) -> ExprId {
        let decls = self.ast.alloc_decl_list(decls);
        let body = self.ast.alloc_expr_list(body);
        self.expr(ExprKind::Let { decls, body })
    }

    /// Unresolved identifier at the current depth.
    pub fn ident(&mut self, name: &str) -> ExprId {
        let name = self.ast.intern(name);
        let depth = self.depth;
        self.expr(ExprKind::Ident {
            name,
            decl: None,
            depth,
        })
    }

    pub fn if_then_else(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    ) -> ExprId {
        self.expr(ExprKind::If {
            cond,
            then_branch,
            else_branch,
        })
    }

    /// Unresolved call.
    pub fn call(&mut self, func: &str, args: impl IntoIterator<Item = ExprId>) -> ExprId {
        let func = self.ast.intern(func);
        let args = self.ast.alloc_expr_list(args);
        self.expr(ExprKind::Call {
            func,
            args,
            decl: None,
        })
    }

    pub fn while_loop(&mut self, cond: ExprId, body: ExprId) -> ExprId {
        self.expr(ExprKind::While { cond, body })
    }

    /// For loop over `var`, whose initializer is the lower bound.
    pub fn for_loop(&mut self, var: DeclId, high: ExprId, body: ExprId) -> ExprId {
        self.expr(ExprKind::For { var, high, body })
    }

    /// Unresolved break.
    pub fn brk(&mut self) -> ExprId {
        self.expr(ExprKind::Break { target: None })
    }

    pub fn assign(&mut self, lhs: ExprId, rhs: ExprId) -> ExprId {
        self.expr(ExprKind::Assign { lhs, rhs })
    }

    // ===== Declarations =====

    /// `var name := init`
    pub fn var(&mut self, name: &str, init: ExprId) -> DeclId {
        self.decl(name, None, DeclKind::Var(VarDecl { init: Some(init) }))
    }

    /// `var name: type_name := init`
    pub fn typed_var(&mut self, name: &str, type_name: &str, init: ExprId) -> DeclId {
        self.decl(name, Some(type_name), DeclKind::Var(VarDecl { init: Some(init) }))
    }

    /// Function parameter: a variable declaration without initializer.
    pub fn param(&mut self, name: &str, type_name: Option<&str>) -> DeclId {
        self.decl(name, type_name, DeclKind::Var(VarDecl { init: None }))
    }

    /// `function name(params)[: type_name] = body`
    pub fn fun(
        &mut self,
        name: &str,
        params: impl IntoIterator<Item = DeclId>,
        type_name: Option<&str>,
        body: ExprId,
    ) -> DeclId {
        let params = self.ast.alloc_decl_list(params);
        self.decl(
            name,
            type_name,
            DeclKind::Fun(FunDecl {
                params,
                body,
                external_name: None,
            }),
        )
    }

    // ===== Resolver decorations =====

    /// Link an identifier or call to its declaration.
    ///
    /// Returns `false` (and changes nothing) if `use_site` is neither.
    pub fn resolve(&mut self, use_site: ExprId, target: DeclId) -> bool {
        match &mut self.ast.expr_mut(use_site).kind {
            ExprKind::Ident { decl, .. } | ExprKind::Call { decl, .. } => {
                *decl = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Link a break to its enclosing loop.
    ///
    /// Returns `false` (and changes nothing) if `brk` is not a break or
    /// `target` is not a loop.
    pub fn resolve_break(&mut self, brk: ExprId, target: ExprId) -> bool {
        if !self.ast.expr(target).kind.is_loop() {
            return false;
        }
        match &mut self.ast.expr_mut(brk).kind {
            ExprKind::Break { target: slot } => {
                *slot = Some(target);
                true
            }
            _ => false,
        }
    }

    /// Mark a declaration as captured by a nested function.
    pub fn set_escapes(&mut self, decl: DeclId, escapes: bool) -> &mut Self {
        self.ast.decl_mut(decl).escapes = escapes;
        self
    }

    /// Record the type checker's verdict for a declaration.
    pub fn set_type(&mut self, decl: DeclId, ty: Type) -> &mut Self {
        self.ast.decl_mut(decl).ty = ty;
        self
    }

    /// Record the symbol name the lowering pass chose for a function.
    ///
    /// Returns `false` if `decl` is not a function.
    pub fn set_external_name(&mut self, decl: DeclId, external: &str) -> bool {
        let external = self.ast.intern(external);
        match &mut self.ast.decl_mut(decl).kind {
            DeclKind::Fun(fun) => {
                fun.external_name = Some(external);
                true
            }
            DeclKind::Var(_) => false,
        }
    }
}
