//! The renderer visitor.
//!
//! One handler per node kind, each writing its construct through the
//! [`RenderContext`]. Layout decisions are local to each handler; the only
//! state carried between them is the nesting level.

use std::io;

use tiger_ir::{
    accept, accept_decl, accept_expr, Ast, BinaryOp, Decl, DeclId, DeclKind, ExprId, FunDecl,
    Location, Name, NodeId, VarDecl, Violation, Visitor,
};
use tiger_stack::ensure_sufficient_stack;

use crate::context::{RenderConfig, RenderContext};
use crate::errors::{RenderError, RenderResult};
use crate::escape::escape_into;

/// Render the tree rooted at `root` and write it to `sink`.
///
/// The text is built in memory first; `sink` receives nothing unless the
/// whole tree renders.
#[tracing::instrument(level = "debug", skip_all, fields(verbose = config.verbose))]
pub fn render(
    ast: &Ast,
    root: impl Into<NodeId>,
    config: RenderConfig,
    sink: &mut impl io::Write,
) -> RenderResult {
    let text = render_to_string(ast, root, config)?;
    sink.write_all(text.as_bytes())?;
    Ok(())
}

/// Render the tree rooted at `root` to a string.
#[tracing::instrument(level = "debug", skip_all, fields(verbose = config.verbose))]
pub fn render_to_string(
    ast: &Ast,
    root: impl Into<NodeId>,
    config: RenderConfig,
) -> Result<String, RenderError> {
    let root = root.into();
    let mut renderer = Renderer::new(ast, config);
    match renderer.render(root) {
        Ok(()) => {
            let text = renderer.into_context().output();
            tracing::debug!(?root, bytes = text.len(), "render complete");
            Ok(text)
        }
        Err(err) => {
            tracing::debug!(?root, %err, "render failed");
            Err(err)
        }
    }
}

/// Tree-walking renderer over one [`Ast`].
pub struct Renderer<'ast> {
    ast: &'ast Ast,
    ctx: RenderContext,
}

impl<'ast> Renderer<'ast> {
    /// Create a renderer writing to a fresh context.
    pub fn new(ast: &'ast Ast, config: RenderConfig) -> Self {
        Self::with_context(ast, RenderContext::with_config(config))
    }

    /// Create a renderer writing through an existing context.
    pub fn with_context(ast: &'ast Ast, ctx: RenderContext) -> Self {
        Self { ast, ctx }
    }

    /// Consume the renderer, returning its context.
    pub fn into_context(self) -> RenderContext {
        self.ctx
    }

    /// Render any node at the current position.
    pub fn render(&mut self, node: NodeId) -> RenderResult {
        let ast = self.ast;
        ensure_sufficient_stack(|| accept(self, ast, node))
    }

    fn render_expr(&mut self, id: ExprId) -> RenderResult {
        let ast = self.ast;
        ensure_sufficient_stack(|| accept_expr(self, ast, id))
    }

    fn render_decl(&mut self, id: DeclId) -> RenderResult {
        let ast = self.ast;
        ensure_sufficient_stack(|| accept_decl(self, ast, id))
    }

    fn name(&self, name: Name) -> &'ast str {
        let ast: &'ast Ast = self.ast;
        ast.name(name)
    }

    fn emit_name(&mut self, name: Name) {
        let text = self.name(name);
        self.ctx.emit(text);
    }

    /// Render `exprs` separated by `sep`.
    fn render_list(&mut self, exprs: &[ExprId], sep: &str) -> RenderResult {
        for (i, &expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(sep);
            }
            self.render_expr(expr)?;
        }
        Ok(())
    }

    /// Render `exprs` one per line, `;`-terminated except the last.
    fn render_lines(&mut self, exprs: &[ExprId]) -> RenderResult {
        for (i, &expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.ctx.emit(";");
            }
            self.ctx.newline();
            self.render_expr(expr)?;
        }
        Ok(())
    }

    /// Render an indented block body.
    fn render_block(&mut self, body: ExprId) -> RenderResult {
        self.ctx.indent_newline();
        self.render_expr(body)?;
        self.ctx.dedent();
        Ok(())
    }

    // Verbose annotations

    fn annotate_decl_site(&mut self, decl: Option<DeclId>) {
        if !self.ctx.verbose() {
            return;
        }
        if let Some(decl) = decl {
            let loc = self.ast.decl(decl).loc;
            self.ctx.emit(&format!("/*decl:{loc}*/"));
        }
    }

    fn annotate_escape(&mut self, decl: &Decl) {
        if self.ctx.verbose() && decl.escapes {
            self.ctx.emit("/*e*/");
        }
    }

    /// `: type` from the source annotation, else from the resolved type.
    fn render_type_annotation(&mut self, decl: &Decl) {
        if let Some(type_name) = decl.type_name {
            self.ctx.emit(": ");
            self.emit_name(type_name);
        } else if let Some(type_name) = decl.ty.surface_name() {
            // Void and undefined have no surface spelling and are never printed.
            self.ctx.emit(": ");
            self.ctx.emit(type_name);
        }
    }
}

/// Fail with `violation` at `loc`.
#[cold]
fn violated(violation: Violation, loc: Location) -> RenderResult {
    tracing::trace!(%violation, %loc, "invariant violation");
    Err(RenderError::invariant(violation, loc))
}

impl<'ast> Visitor<'ast> for Renderer<'ast> {
    type Output = RenderResult;

    fn visit_integer_literal(&mut self, value: i32, _loc: Location) -> RenderResult {
        self.ctx.emit(&value.to_string());
        Ok(())
    }

    fn visit_string_literal(&mut self, value: Name, _loc: Location) -> RenderResult {
        let mut text = String::from("\"");
        escape_into(&mut text, self.name(value));
        text.push('"');
        self.ctx.emit(&text);
        Ok(())
    }

    fn visit_binary_operator(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        _loc: Location,
    ) -> RenderResult {
        self.ctx.emit("(");
        self.render_expr(left)?;
        self.ctx.emit(" ");
        self.ctx.emit(op.as_symbol());
        self.ctx.emit(" ");
        self.render_expr(right)?;
        self.ctx.emit(")");
        Ok(())
    }

    fn visit_sequence(&mut self, exprs: &'ast [ExprId], loc: Location) -> RenderResult {
        if exprs.is_empty() {
            return violated(Violation::EmptySequence, loc);
        }
        self.ctx.emit("(");
        self.ctx.indent();
        self.render_lines(exprs)?;
        self.ctx.dedent_newline();
        self.ctx.emit(")");
        Ok(())
    }

    fn visit_let(
        &mut self,
        decls: &'ast [DeclId],
        body: &'ast [ExprId],
        loc: Location,
    ) -> RenderResult {
        if body.is_empty() {
            return violated(Violation::EmptyLetBody, loc);
        }
        self.ctx.emit("let");
        self.ctx.indent();
        for &decl in decls {
            self.ctx.newline();
            self.render_decl(decl)?;
        }
        self.ctx.dedent_newline();
        self.ctx.emit("in");
        self.ctx.indent();
        self.render_lines(body)?;
        self.ctx.dedent_newline();
        self.ctx.emit("end");
        Ok(())
    }

    fn visit_identifier(
        &mut self,
        name: Name,
        decl: Option<DeclId>,
        depth: u32,
        _loc: Location,
    ) -> RenderResult {
        self.emit_name(name);
        if !self.ctx.verbose() {
            return Ok(());
        }
        if let Some(decl) = decl {
            let decl = self.ast.decl(decl);
            let depth_diff = i64::from(depth) - i64::from(decl.depth);
            let annotation = if depth_diff == 0 {
                format!("/*decl:{}*/", decl.loc)
            } else {
                format!("/*decl:{} depth_diff:{depth_diff}*/", decl.loc)
            };
            self.ctx.emit(&annotation);
        }
        Ok(())
    }

    fn visit_if_then_else(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
        _loc: Location,
    ) -> RenderResult {
        self.ctx.emit("if");
        self.ctx.indent_newline();
        self.render_expr(cond)?;
        self.ctx.dedent_newline();
        self.ctx.emit("then");
        self.ctx.indent_newline();
        self.render_expr(then_branch)?;
        self.ctx.dedent_newline();
        self.ctx.emit("else");
        self.render_block(else_branch)
    }

    fn visit_var_decl(&mut self, decl: &'ast Decl, var: &'ast VarDecl) -> RenderResult {
        if var.init.is_some() {
            self.ctx.emit("var ");
        }
        self.emit_name(decl.name);
        self.annotate_escape(decl);
        self.render_type_annotation(decl);
        if let Some(init) = var.init {
            self.ctx.emit(" := ");
            self.render_expr(init)?;
        }
        Ok(())
    }

    fn visit_fun_decl(&mut self, decl: &'ast Decl, fun: &'ast FunDecl) -> RenderResult {
        self.ctx.emit("function ");
        self.emit_name(decl.name);
        if self.ctx.verbose() {
            if let Some(external) = fun.external_name.filter(|&ext| ext != decl.name) {
                let text = format!("/*{}*/", self.name(external));
                self.ctx.emit(&text);
            }
        }
        let ast = self.ast;
        self.ctx.emit("(");
        for (i, &param) in ast.decl_list(fun.params).iter().enumerate() {
            if i > 0 {
                self.ctx.emit(", ");
            }
            self.render_decl(param)?;
        }
        self.ctx.emit(")");
        if let Some(type_name) = decl.type_name {
            self.ctx.emit(": ");
            self.emit_name(type_name);
        }
        self.ctx.emit(" =");
        self.render_block(fun.body)
    }

    fn visit_fun_call(
        &mut self,
        func: Name,
        args: &'ast [ExprId],
        decl: Option<DeclId>,
        _loc: Location,
    ) -> RenderResult {
        self.emit_name(func);
        self.annotate_decl_site(decl);
        self.ctx.emit("(");
        self.render_list(args, ", ")?;
        self.ctx.emit(")");
        Ok(())
    }

    fn visit_while_loop(&mut self, cond: ExprId, body: ExprId, _loc: Location) -> RenderResult {
        self.ctx.emit("while ");
        self.render_expr(cond)?;
        self.ctx.emit(" do");
        self.render_block(body)
    }

    fn visit_for_loop(
        &mut self,
        var: DeclId,
        high: ExprId,
        body: ExprId,
        loc: Location,
    ) -> RenderResult {
        let ast = self.ast;
        let decl = ast.decl(var);
        let DeclKind::Var(VarDecl { init: Some(low) }) = decl.kind else {
            return violated(Violation::MissingLoopBound, loc);
        };
        self.ctx.emit("for ");
        self.emit_name(decl.name);
        self.annotate_escape(decl);
        self.ctx.emit(" := ");
        self.render_expr(low)?;
        self.ctx.emit(" to ");
        self.render_expr(high)?;
        self.ctx.emit(" do");
        self.render_block(body)
    }

    fn visit_break(&mut self, target: Option<ExprId>, _loc: Location) -> RenderResult {
        self.ctx.emit("break");
        if self.ctx.verbose() {
            if let Some(target) = target {
                let loc = self.ast.expr(target).loc;
                self.ctx.emit(&format!("/*loop:{loc}*/"));
            }
        }
        Ok(())
    }

    fn visit_assign(&mut self, lhs: ExprId, rhs: ExprId, _loc: Location) -> RenderResult {
        self.render_expr(lhs)?;
        self.ctx.emit(" := ");
        self.render_expr(rhs)
    }
}

#[cfg(test)]
mod tests;
