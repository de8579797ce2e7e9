//! Tree-building shortcuts shared by unit and integration tests.
//!
//! Every node gets an empty span unless the helper takes one. Trees built
//! here compare equal with `==` when built from the same calls.

use crate::ast::*;
use text_size::{TextRange, TextSize};

fn no_span() -> TextRange {
    TextRange::default()
}

/// Span from byte offsets.
pub fn span(start: u32, end: u32) -> TextRange {
    TextRange::new(TextSize::from(start), TextSize::from(end))
}

pub fn ident(name: &str) -> Expr {
    Expr::Ident(Ident::new(name, no_span()))
}

pub fn int(value: i64) -> Expr {
    Expr::BasicLit(BasicLit {
        kind: LitKind::Int,
        value: value.to_string(),
        span: no_span(),
    })
}

/// Double-quoted string literal.
pub fn string(contents: &str) -> Expr {
    Expr::BasicLit(BasicLit::string(contents, no_span()))
}

pub fn bad_expr() -> Expr {
    Expr::Bad(no_span())
}

pub fn call_expr(fun: Expr, args: Vec<Expr>) -> CallExpr {
    CallExpr {
        fun: Box::new(fun),
        args,
        has_ellipsis: false,
        span: no_span(),
    }
}

pub fn call(fun: Expr, args: Vec<Expr>) -> Expr {
    Expr::Call(call_expr(fun, args))
}

pub fn selector(x: Expr, sel: &str) -> Expr {
    Expr::Selector(SelectorExpr {
        x: Box::new(x),
        sel: Ident::new(sel, no_span()),
        span: no_span(),
    })
}

pub fn binary(x: Expr, op: BinaryOp, y: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        x: Box::new(x),
        op,
        y: Box::new(y),
        span: no_span(),
    })
}

pub fn unary(op: UnaryOp, x: Expr) -> Expr {
    Expr::Unary(UnaryExpr {
        op,
        x: Box::new(x),
        span: no_span(),
    })
}

pub fn paren(x: Expr) -> Expr {
    Expr::Paren(ParenExpr {
        x: Box::new(x),
        span: no_span(),
    })
}

pub fn text(text: &str) -> Segment {
    Segment::Text(TextSegment {
        text: text.to_string(),
        span: no_span(),
    })
}

/// Embedded expression without a directive.
pub fn embed(expr: Expr) -> Segment {
    Segment::Expr(ExprSegment {
        expr,
        directive: None,
        span: no_span(),
    })
}

/// Embedded expression with a directive such as `"d"`.
pub fn embed_fmt(expr: Expr, directive: &str) -> Segment {
    Segment::Expr(ExprSegment {
        expr,
        directive: Some(directive.to_string()),
        span: no_span(),
    })
}

pub fn interp_lit(segments: Vec<Segment>) -> InterpLit {
    InterpLit {
        segments,
        span: no_span(),
    }
}

pub fn interp(segments: Vec<Segment>) -> Expr {
    Expr::Interp(interp_lit(segments))
}

/// `func()` with no parameters or results.
pub fn func_type() -> FuncType {
    FuncType {
        type_params: None,
        params: FieldList::default(),
        results: None,
        span: no_span(),
    }
}

/// `func() { stmts }`
pub fn func_lit(stmts: Vec<Stmt>) -> Expr {
    Expr::FuncLit(FuncLit {
        ty: func_type(),
        body: block(stmts),
        span: no_span(),
    })
}

pub fn field(names: &[&str], ty: Expr) -> Field {
    Field {
        names: names.iter().map(|name| Ident::new(*name, no_span())).collect(),
        ty,
        tag: None,
        span: no_span(),
    }
}

pub fn field_list(fields: Vec<Field>) -> FieldList {
    FieldList {
        fields,
        span: no_span(),
    }
}

pub fn block(stmts: Vec<Stmt>) -> BlockStmt {
    BlockStmt {
        stmts,
        span: no_span(),
    }
}

pub fn expr_stmt(x: Expr) -> Stmt {
    Stmt::Expr(ExprStmt { x, span: no_span() })
}

/// `lhs = rhs`
pub fn assign(lhs: Vec<Expr>, rhs: Vec<Expr>) -> Stmt {
    Stmt::Assign(AssignStmt {
        lhs,
        op: AssignOp::Assign,
        rhs,
        span: no_span(),
    })
}

/// `lhs := rhs`
pub fn define(lhs: Vec<Expr>, rhs: Vec<Expr>) -> Stmt {
    Stmt::Assign(AssignStmt {
        lhs,
        op: AssignOp::Define,
        rhs,
        span: no_span(),
    })
}

pub fn ret(results: Vec<Expr>) -> Stmt {
    Stmt::Return(ReturnStmt {
        results,
        span: no_span(),
    })
}

/// `case list: body`; an empty list is `default:`.
pub fn case_clause(list: Vec<Expr>, body: Vec<Stmt>) -> Stmt {
    Stmt::CaseClause(CaseClause {
        list,
        body,
        span: no_span(),
    })
}

/// `case comm: body`; no comm is `default:`.
pub fn comm_clause(comm: Option<Stmt>, body: Vec<Stmt>) -> Stmt {
    Stmt::CommClause(CommClause {
        comm: comm.map(Box::new),
        body,
        span: no_span(),
    })
}

/// `func name() { stmts }`
pub fn func_decl(name: &str, stmts: Vec<Stmt>) -> Decl {
    Decl::Func(FuncDecl {
        recv: None,
        name: Ident::new(name, no_span()),
        ty: func_type(),
        body: Some(block(stmts)),
        span: no_span(),
    })
}

/// `var name = values...`
pub fn var_decl(name: &str, values: Vec<Expr>) -> Decl {
    Decl::Gen(GenDecl {
        keyword: DeclKeyword::Var,
        specs: vec![Spec::Value(ValueSpec {
            names: vec![Ident::new(name, no_span())],
            ty: None,
            values,
            span: no_span(),
        })],
        grouped: false,
        span: no_span(),
    })
}

/// `package main` with the given declarations and no imports.
pub fn tree(decls: Vec<Decl>) -> SyntaxTree {
    SyntaxTree {
        package: Ident::new("main", no_span()),
        imports: ImportTable::new(),
        decls,
        source: SourceFile::unnamed(),
    }
}
