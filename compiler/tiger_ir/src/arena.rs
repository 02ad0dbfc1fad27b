//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all expressions and declarations
//! - Child references use `ExprId` / `DeclId` indices
//! - Lists use ranges into flattened id tables

use super::ast::{Decl, Expr, NodeKind};
use super::{DeclId, DeclRange, ExprId, ExprRange, Name, NodeId, StringInterner};

/// Contiguous storage for one resolved program tree.
///
/// The arena owns every node and the interner their names resolve through.
/// Consumers only read it; the parser and resolver populate it through
/// [`AstBuilder`](crate::AstBuilder).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Ast {
    /// All expressions (indexed by `ExprId`).
    exprs: Vec<Expr>,

    /// Flattened expression lists (sequence elements, call arguments, let bodies).
    expr_lists: Vec<ExprId>,

    /// All declarations (indexed by `DeclId`).
    decls: Vec<Decl>,

    /// Flattened declaration lists (let declarations, function parameters).
    decl_lists: Vec<DeclId>,

    /// Names of identifiers, types, functions, and string literal contents.
    interner: StringInterner,
}

/// Convert a table length to the next u32 index.
///
/// # Panics
/// Panics if the table holds more than `u32::MAX` entries.
#[inline]
fn next_index(len: usize) -> u32 {
    u32::try_from(len).unwrap_or_else(|_| panic!("AST table exceeded {} entries", u32::MAX))
}

impl Ast {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Expression allocation =====

    /// Allocate expression, return ID.
    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::new(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    /// Get expression by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    /// Get mutable expression by ID.
    ///
    /// Only the resolver needs this, to attach links after construction.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn expr_mut(&mut self, id: ExprId) -> &mut Expr {
        &mut self.exprs[id.index()]
    }

    /// Get number of expressions.
    #[inline]
    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    // ===== Expression list allocation =====

    /// Allocate expression list, return range.
    pub fn alloc_expr_list(&mut self, exprs: impl IntoIterator<Item = ExprId>) -> ExprRange {
        let start = next_index(self.expr_lists.len());
        self.expr_lists.extend(exprs);
        let len = next_index(self.expr_lists.len()) - start;
        ExprRange::new(start, len)
    }

    /// Get expression list by range.
    #[inline]
    pub fn expr_list(&self, range: ExprRange) -> &[ExprId] {
        let start = range.start as usize;
        let end = start + range.len();
        &self.expr_lists[start..end]
    }

    // ===== Declaration allocation =====

    /// Allocate declaration, return ID.
    #[inline]
    pub fn alloc_decl(&mut self, decl: Decl) -> DeclId {
        let id = DeclId::new(next_index(self.decls.len()));
        self.decls.push(decl);
        id
    }

    /// Get declaration by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn decl(&self, id: DeclId) -> &Decl {
        &self.decls[id.index()]
    }

    /// Get mutable declaration by ID.
    ///
    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn decl_mut(&mut self, id: DeclId) -> &mut Decl {
        &mut self.decls[id.index()]
    }

    /// Get number of declarations.
    #[inline]
    pub fn decl_count(&self) -> usize {
        self.decls.len()
    }

    // ===== Declaration list allocation =====

    /// Allocate declaration list, return range.
    pub fn alloc_decl_list(&mut self, decls: impl IntoIterator<Item = DeclId>) -> DeclRange {
        let start = next_index(self.decl_lists.len());
        self.decl_lists.extend(decls);
        let len = next_index(self.decl_lists.len()) - start;
        DeclRange::new(start, len)
    }

    /// Get declaration list by range.
    #[inline]
    pub fn decl_list(&self, range: DeclRange) -> &[DeclId] {
        let start = range.start as usize;
        let end = start + range.len();
        &self.decl_lists[start..end]
    }

    // ===== Names =====

    /// Intern a string into this tree's interner.
    pub fn intern(&mut self, s: &str) -> Name {
        self.interner.intern(s)
    }

    /// Resolve a name to its text.
    #[inline]
    #[track_caller]
    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }

    // ===== Inspection =====

    /// Kind tag of any node.
    pub fn node_kind(&self, node: NodeId) -> NodeKind {
        match node {
            NodeId::Expr(id) => self.expr(id).kind.node_kind(),
            NodeId::Decl(id) => self.decl(id).node_kind(),
        }
    }
}
