//! The evaluator visitor.
//!
//! Strict, eager, post-order: every operand is evaluated before its
//! operator, left before right, and both sides always run. Only the chosen
//! branch of an `if` is evaluated.

use tiger_ir::{
    accept, accept_expr, Ast, BinaryOp, Decl, DeclId, ExprId, FunDecl, Location, Name, NodeId,
    NodeKind, VarDecl, Visitor,
};
use tiger_stack::ensure_sufficient_stack;

use crate::errors::{empty_sequence, unsupported, EvalResult};
use crate::operators::evaluate_binary;

/// Evaluate the tree rooted at `root` to an integer.
///
/// # Errors
///
/// `UnsupportedConstruct` for any reached node outside the evaluable subset,
/// `InvariantViolation` for division by zero or an empty sequence.
#[tracing::instrument(level = "debug", skip_all)]
pub fn evaluate(ast: &Ast, root: impl Into<NodeId>) -> EvalResult {
    let root = root.into();
    let result = Evaluator::new(ast).eval(root);
    match &result {
        Ok(value) => tracing::debug!(?root, value, "evaluation complete"),
        Err(err) => tracing::debug!(?root, %err, "evaluation failed"),
    }
    result
}

/// Tree-walking evaluator over one [`Ast`].
///
/// Holds no environment: the evaluable subset never binds names.
pub struct Evaluator<'ast> {
    ast: &'ast Ast,
}

impl<'ast> Evaluator<'ast> {
    pub fn new(ast: &'ast Ast) -> Self {
        Self { ast }
    }

    /// Evaluate any node.
    pub fn eval(&mut self, node: NodeId) -> EvalResult {
        let ast = self.ast;
        ensure_sufficient_stack(|| accept(self, ast, node))
    }

    fn eval_expr(&mut self, id: ExprId) -> EvalResult {
        let ast = self.ast;
        ensure_sufficient_stack(|| accept_expr(self, ast, id))
    }
}

/// Reject a node kind outside the evaluable subset.
#[cold]
fn reject(construct: NodeKind, loc: Location) -> EvalResult {
    tracing::trace!(%construct, %loc, "unsupported construct");
    Err(unsupported(construct).with_loc(loc))
}

impl<'ast> Visitor<'ast> for Evaluator<'ast> {
    type Output = EvalResult;

    fn visit_integer_literal(&mut self, value: i32, _loc: Location) -> EvalResult {
        Ok(value)
    }

    fn visit_binary_operator(
        &mut self,
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
        loc: Location,
    ) -> EvalResult {
        let lhs = self.eval_expr(left)?;
        let rhs = self.eval_expr(right)?;
        evaluate_binary(lhs, rhs, op).map_err(|err| err.with_loc(loc))
    }

    fn visit_sequence(&mut self, exprs: &'ast [ExprId], loc: Location) -> EvalResult {
        let Some((&last, init)) = exprs.split_last() else {
            return Err(empty_sequence().with_loc(loc));
        };
        for &expr in init {
            self.eval_expr(expr)?;
        }
        self.eval_expr(last)
    }

    fn visit_if_then_else(
        &mut self,
        cond: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
        _loc: Location,
    ) -> EvalResult {
        if self.eval_expr(cond)? != 0 {
            self.eval_expr(then_branch)
        } else {
            self.eval_expr(else_branch)
        }
    }

    // Everything below needs variable state or has effects.

    fn visit_string_literal(&mut self, _value: Name, loc: Location) -> EvalResult {
        reject(NodeKind::StringLiteral, loc)
    }

    fn visit_let(
        &mut self,
        _decls: &'ast [DeclId],
        _body: &'ast [ExprId],
        loc: Location,
    ) -> EvalResult {
        reject(NodeKind::Let, loc)
    }

    fn visit_identifier(
        &mut self,
        _name: Name,
        _decl: Option<DeclId>,
        _depth: u32,
        loc: Location,
    ) -> EvalResult {
        reject(NodeKind::Identifier, loc)
    }

    fn visit_var_decl(&mut self, decl: &'ast Decl, _var: &'ast VarDecl) -> EvalResult {
        reject(NodeKind::VarDecl, decl.loc)
    }

    fn visit_fun_decl(&mut self, decl: &'ast Decl, _fun: &'ast FunDecl) -> EvalResult {
        reject(NodeKind::FunDecl, decl.loc)
    }

    fn visit_fun_call(
        &mut self,
        _func: Name,
        _args: &'ast [ExprId],
        _decl: Option<DeclId>,
        loc: Location,
    ) -> EvalResult {
        reject(NodeKind::FunCall, loc)
    }

    fn visit_while_loop(&mut self, _cond: ExprId, _body: ExprId, loc: Location) -> EvalResult {
        reject(NodeKind::WhileLoop, loc)
    }

    fn visit_for_loop(
        &mut self,
        _var: DeclId,
        _high: ExprId,
        _body: ExprId,
        loc: Location,
    ) -> EvalResult {
        reject(NodeKind::ForLoop, loc)
    }

    fn visit_break(&mut self, _target: Option<ExprId>, loc: Location) -> EvalResult {
        reject(NodeKind::Break, loc)
    }

    fn visit_assign(&mut self, _lhs: ExprId, _rhs: ExprId, loc: Location) -> EvalResult {
        reject(NodeKind::Assign, loc)
    }
}
