//! Walking functions for AST traversal with mutable visitors.
//!
//! These functions provide the default traversal behavior for each AST node
//! type and are called by the default implementations of the [`MutVisitor`]
//! trait methods. Each one visits every child slot that can hold a statement
//! or expression, left to right. Absent optional slots are skipped.
//!
//! The matches below are exhaustive on purpose: a new node kind does not
//! compile until its children are walked here.

use super::mut_visit::MutVisitor;
use crate::ast::*;
use crate::error::{LowerError, LowerResult, MalformedReason};

/// Walk a syntax tree, visiting every top-level declaration.
///
/// The import table holds no expressions and is not visited.
pub fn walk_tree<V: MutVisitor + ?Sized>(visitor: &mut V, tree: &mut SyntaxTree) -> LowerResult<()> {
    for decl in &mut tree.decls {
        visitor.visit_decl(decl)?;
    }
    Ok(())
}

/// Walk a declaration.
pub fn walk_decl<V: MutVisitor + ?Sized>(visitor: &mut V, decl: &mut Decl) -> LowerResult<()> {
    match decl {
        Decl::Func(f) => {
            if let Some(recv) = &mut f.recv {
                visitor.visit_field_list(recv)?;
            }
            visitor.visit_func_type(&mut f.ty)?;
            if let Some(body) = &mut f.body {
                visitor.visit_block(body)?;
            }
            Ok(())
        }
        Decl::Gen(g) => walk_gen_decl(visitor, g),
        Decl::Bad(span) => Err(LowerError::malformed(
            *span,
            MalformedReason::ParserErrorNode("declaration"),
        )),
    }
}

/// Walk a `const`, `type` or `var` declaration, visiting each spec.
pub fn walk_gen_decl<V: MutVisitor + ?Sized>(visitor: &mut V, decl: &mut GenDecl) -> LowerResult<()> {
    for spec in &mut decl.specs {
        visitor.visit_spec(spec)?;
    }
    Ok(())
}

/// Walk a spec, visiting its type and initializer expressions.
pub fn walk_spec<V: MutVisitor + ?Sized>(visitor: &mut V, spec: &mut Spec) -> LowerResult<()> {
    match spec {
        Spec::Value(v) => {
            if let Some(ty) = &mut v.ty {
                visitor.visit_expr(ty)?;
            }
            walk_exprs(visitor, &mut v.values)
        }
        Spec::Type(t) => {
            if let Some(params) = &mut t.type_params {
                visitor.visit_field_list(params)?;
            }
            visitor.visit_expr(&mut t.ty)
        }
    }
}

/// Walk a statement, visiting all child nodes.
pub fn walk_stmt<V: MutVisitor + ?Sized>(visitor: &mut V, stmt: &mut Stmt) -> LowerResult<()> {
    match stmt {
        Stmt::Bad(span) => Err(LowerError::malformed(
            *span,
            MalformedReason::ParserErrorNode("statement"),
        )),
        Stmt::Decl(d) => walk_gen_decl(visitor, d),
        Stmt::Empty(_) | Stmt::Branch(_) => Ok(()),
        Stmt::Labeled(l) => visitor.visit_stmt(&mut l.stmt),
        Stmt::Expr(e) => visitor.visit_expr(&mut e.x),
        Stmt::Send(s) => {
            visitor.visit_expr(&mut s.chan)?;
            visitor.visit_expr(&mut s.value)
        }
        Stmt::IncDec(s) => visitor.visit_expr(&mut s.x),
        Stmt::Assign(a) => {
            walk_exprs(visitor, &mut a.lhs)?;
            walk_exprs(visitor, &mut a.rhs)
        }
        Stmt::Go(g) => visitor.visit_call(&mut g.call),
        Stmt::Defer(d) => visitor.visit_call(&mut d.call),
        Stmt::Return(r) => walk_exprs(visitor, &mut r.results),
        Stmt::Block(b) => visitor.visit_block(b),
        Stmt::If(i) => {
            walk_opt_stmt(visitor, &mut i.init)?;
            visitor.visit_expr(&mut i.cond)?;
            visitor.visit_block(&mut i.body)?;
            walk_opt_stmt(visitor, &mut i.else_branch)
        }
        Stmt::CaseClause(c) => visitor.visit_case_clause(c),
        Stmt::Switch(s) => {
            walk_opt_stmt(visitor, &mut s.init)?;
            if let Some(tag) = &mut s.tag {
                visitor.visit_expr(tag)?;
            }
            walk_case_clauses(visitor, &mut s.body)
        }
        Stmt::TypeSwitch(t) => {
            walk_opt_stmt(visitor, &mut t.init)?;
            match t.assign.as_ref() {
                Stmt::Assign(_) | Stmt::Expr(_) => {}
                other => {
                    return Err(LowerError::malformed(
                        other.span(),
                        MalformedReason::InvalidTypeSwitchGuard(other.kind_name()),
                    ));
                }
            }
            visitor.visit_stmt(&mut t.assign)?;
            walk_case_clauses(visitor, &mut t.body)
        }
        Stmt::CommClause(c) => visitor.visit_comm_clause(c),
        Stmt::Select(s) => {
            for stmt in &mut s.body.stmts {
                match stmt {
                    Stmt::CommClause(clause) => visitor.visit_comm_clause(clause)?,
                    other => {
                        return Err(LowerError::malformed(
                            other.span(),
                            MalformedReason::NotACommClause(other.kind_name()),
                        ));
                    }
                }
            }
            Ok(())
        }
        Stmt::For(f) => {
            walk_opt_stmt(visitor, &mut f.init)?;
            if let Some(cond) = &mut f.cond {
                visitor.visit_expr(cond)?;
            }
            visitor.visit_block(&mut f.body)?;
            walk_opt_stmt(visitor, &mut f.post)
        }
        Stmt::Range(r) => {
            if let Some(key) = &mut r.key {
                visitor.visit_expr(key)?;
            }
            if let Some(value) = &mut r.value {
                visitor.visit_expr(value)?;
            }
            visitor.visit_expr(&mut r.x)?;
            visitor.visit_block(&mut r.body)
        }
    }
}

/// Walk a block, visiting every statement.
pub fn walk_block<V: MutVisitor + ?Sized>(visitor: &mut V, block: &mut BlockStmt) -> LowerResult<()> {
    walk_stmts(visitor, &mut block.stmts)
}

/// Walk a case clause, visiting the match list and the body.
pub fn walk_case_clause<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    clause: &mut CaseClause,
) -> LowerResult<()> {
    walk_exprs(visitor, &mut clause.list)?;
    walk_stmts(visitor, &mut clause.body)
}

/// Walk a select clause, visiting the send/receive statement and the body.
pub fn walk_comm_clause<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    clause: &mut CommClause,
) -> LowerResult<()> {
    walk_opt_stmt(visitor, &mut clause.comm)?;
    walk_stmts(visitor, &mut clause.body)
}

/// Walk an expression, visiting all child nodes.
pub fn walk_expr<V: MutVisitor + ?Sized>(visitor: &mut V, expr: &mut Expr) -> LowerResult<()> {
    match expr {
        Expr::Bad(span) => Err(LowerError::malformed(
            *span,
            MalformedReason::ParserErrorNode("expression"),
        )),
        Expr::Ident(_) | Expr::BasicLit(_) => Ok(()),
        Expr::Ellipsis(e) => walk_opt_expr(visitor, &mut e.elt),
        Expr::FuncLit(f) => {
            visitor.visit_func_type(&mut f.ty)?;
            visitor.visit_block(&mut f.body)
        }
        Expr::CompositeLit(c) => {
            walk_opt_expr(visitor, &mut c.ty)?;
            walk_exprs(visitor, &mut c.elts)
        }
        Expr::Paren(p) => visitor.visit_expr(&mut p.x),
        Expr::Selector(s) => visitor.visit_expr(&mut s.x),
        Expr::Index(i) => {
            visitor.visit_expr(&mut i.x)?;
            walk_exprs(visitor, &mut i.indices)
        }
        Expr::Slice(s) => {
            visitor.visit_expr(&mut s.x)?;
            walk_opt_expr(visitor, &mut s.low)?;
            walk_opt_expr(visitor, &mut s.high)?;
            walk_opt_expr(visitor, &mut s.max)
        }
        Expr::TypeAssert(t) => {
            visitor.visit_expr(&mut t.x)?;
            walk_opt_expr(visitor, &mut t.ty)
        }
        Expr::Call(c) => visitor.visit_call(c),
        Expr::Star(s) => visitor.visit_expr(&mut s.x),
        Expr::Unary(u) => visitor.visit_expr(&mut u.x),
        Expr::Binary(b) => {
            visitor.visit_expr(&mut b.x)?;
            visitor.visit_expr(&mut b.y)
        }
        Expr::KeyValue(kv) => {
            visitor.visit_expr(&mut kv.key)?;
            visitor.visit_expr(&mut kv.value)
        }
        Expr::ArrayType(a) => {
            walk_opt_expr(visitor, &mut a.len)?;
            visitor.visit_expr(&mut a.elt)
        }
        Expr::StructType(s) => visitor.visit_field_list(&mut s.fields),
        Expr::FuncType(f) => visitor.visit_func_type(f),
        Expr::InterfaceType(i) => visitor.visit_field_list(&mut i.methods),
        Expr::MapType(m) => {
            visitor.visit_expr(&mut m.key)?;
            visitor.visit_expr(&mut m.value)
        }
        Expr::ChanType(c) => visitor.visit_expr(&mut c.value),
        Expr::Interp(lit) => {
            for segment in &mut lit.segments {
                if let Segment::Expr(embedded) = segment {
                    visitor.visit_expr(&mut embedded.expr)?;
                }
            }
            Ok(())
        }
    }
}

/// Walk a call, visiting the function expression and every argument.
pub fn walk_call<V: MutVisitor + ?Sized>(visitor: &mut V, call: &mut CallExpr) -> LowerResult<()> {
    visitor.visit_expr(&mut call.fun)?;
    walk_exprs(visitor, &mut call.args)
}

/// Walk a signature, visiting type parameters, parameters and results.
pub fn walk_func_type<V: MutVisitor + ?Sized>(visitor: &mut V, ty: &mut FuncType) -> LowerResult<()> {
    if let Some(params) = &mut ty.type_params {
        visitor.visit_field_list(params)?;
    }
    visitor.visit_field_list(&mut ty.params)?;
    if let Some(results) = &mut ty.results {
        visitor.visit_field_list(results)?;
    }
    Ok(())
}

/// Walk a field list, visiting each field's type.
pub fn walk_field_list<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    fields: &mut FieldList,
) -> LowerResult<()> {
    for field in &mut fields.fields {
        visitor.visit_expr(&mut field.ty)?;
    }
    Ok(())
}

fn walk_stmts<V: MutVisitor + ?Sized>(visitor: &mut V, stmts: &mut [Stmt]) -> LowerResult<()> {
    for stmt in stmts {
        visitor.visit_stmt(stmt)?;
    }
    Ok(())
}

fn walk_exprs<V: MutVisitor + ?Sized>(visitor: &mut V, exprs: &mut [Expr]) -> LowerResult<()> {
    for expr in exprs {
        visitor.visit_expr(expr)?;
    }
    Ok(())
}

fn walk_opt_stmt<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    stmt: &mut Option<Box<Stmt>>,
) -> LowerResult<()> {
    match stmt {
        Some(stmt) => visitor.visit_stmt(stmt),
        None => Ok(()),
    }
}

fn walk_opt_expr<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    expr: &mut Option<Box<Expr>>,
) -> LowerResult<()> {
    match expr {
        Some(expr) => visitor.visit_expr(expr),
        None => Ok(()),
    }
}

/// Walk the case clauses forming a switch body.
fn walk_case_clauses<V: MutVisitor + ?Sized>(
    visitor: &mut V,
    body: &mut BlockStmt,
) -> LowerResult<()> {
    for stmt in &mut body.stmts {
        match stmt {
            Stmt::CaseClause(clause) => visitor.visit_case_clause(clause)?,
            other => {
                return Err(LowerError::malformed(
                    other.span(),
                    MalformedReason::NotACaseClause(other.kind_name()),
                ));
            }
        }
    }
    Ok(())
}
