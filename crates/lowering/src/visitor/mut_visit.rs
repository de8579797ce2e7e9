//! Mutable visitor pattern for AST transformation.
//!
//! Every method receives the node by `&mut`, so an implementation can
//! overwrite the node in its slot and keep walking. Default implementations
//! delegate to [`mut_walk`](super::mut_walk), which descends into every child
//! slot that can hold a statement or expression.
//!
//! ## Usage Pattern
//!
//! ```rust,ignore
//! use gopp_lowering::visitor::{mut_walk, MutVisitor};
//!
//! struct CallCounter {
//!     calls: usize,
//! }
//!
//! impl MutVisitor for CallCounter {
//!     fn visit_call(&mut self, call: &mut CallExpr) -> LowerResult<()> {
//!         self.calls += 1;
//!         mut_walk::walk_call(self, call)
//!     }
//! }
//! ```
//!
//! Overrides that rewrite a node should call the matching `walk_*` function
//! afterwards so the replacement's children are visited too.

use crate::ast::*;
use crate::error::LowerResult;

/// Trait for visiting AST nodes with the ability to replace them.
///
/// Traversal stops at the first error; parser error nodes surface as
/// [`LowerError::MalformedTree`](crate::error::LowerError::MalformedTree).
pub trait MutVisitor {
    fn visit_tree(&mut self, tree: &mut SyntaxTree) -> LowerResult<()> {
        super::mut_walk::walk_tree(self, tree)
    }

    fn visit_decl(&mut self, decl: &mut Decl) -> LowerResult<()> {
        super::mut_walk::walk_decl(self, decl)
    }

    fn visit_spec(&mut self, spec: &mut Spec) -> LowerResult<()> {
        super::mut_walk::walk_spec(self, spec)
    }

    fn visit_stmt(&mut self, stmt: &mut Stmt) -> LowerResult<()> {
        super::mut_walk::walk_stmt(self, stmt)
    }

    fn visit_block(&mut self, block: &mut BlockStmt) -> LowerResult<()> {
        super::mut_walk::walk_block(self, block)
    }

    fn visit_case_clause(&mut self, clause: &mut CaseClause) -> LowerResult<()> {
        super::mut_walk::walk_case_clause(self, clause)
    }

    fn visit_comm_clause(&mut self, clause: &mut CommClause) -> LowerResult<()> {
        super::mut_walk::walk_comm_clause(self, clause)
    }

    fn visit_expr(&mut self, expr: &mut Expr) -> LowerResult<()> {
        super::mut_walk::walk_expr(self, expr)
    }

    fn visit_call(&mut self, call: &mut CallExpr) -> LowerResult<()> {
        super::mut_walk::walk_call(self, call)
    }

    fn visit_func_type(&mut self, ty: &mut FuncType) -> LowerResult<()> {
        super::mut_walk::walk_func_type(self, ty)
    }

    fn visit_field_list(&mut self, fields: &mut FieldList) -> LowerResult<()> {
        super::mut_walk::walk_field_list(self, fields)
    }
}
