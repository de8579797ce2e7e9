//! Core AST node definitions (syntax tree, declarations and statements).

use super::expr::{CallExpr, Expr, FieldList, FuncType, Ident};
use super::imports::ImportTable;
use super::ops::{AssignOp, BranchKind, DeclKeyword, IncDecOp};
use super::source::SourceFile;
use serde::{Deserialize, Serialize};
use text_size::TextRange;

/// A whole compilation unit (root AST node).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntaxTree {
    pub package: Ident,
    pub imports: ImportTable,
    pub decls: Vec<Decl>,
    pub source: SourceFile,
}

/// Top-level declarations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Func(FuncDecl),
    Gen(GenDecl),
    Bad(TextRange),
}

impl Decl {
    pub fn span(&self) -> TextRange {
        match self {
            Decl::Func(d) => d.span,
            Decl::Gen(d) => d.span,
            Decl::Bad(span) => *span,
        }
    }
}

/// `func (recv) name[T](params) results { body }`.
///
/// `body` is absent for functions implemented outside Go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub recv: Option<FieldList>,
    pub name: Ident,
    pub ty: FuncType,
    pub body: Option<BlockStmt>,
    pub span: TextRange,
}

/// `const`, `type` or `var` declaration, possibly grouped in parentheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenDecl {
    pub keyword: DeclKeyword,
    pub specs: Vec<Spec>,
    pub grouped: bool,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Spec {
    Value(ValueSpec),
    Type(TypeSpec),
}

/// `names [type] [= values]` inside a `const` or `var` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
    pub span: TextRange,
}

/// `name[T] type` or `name = type` (alias when `assign` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: Ident,
    pub type_params: Option<FieldList>,
    pub assign: bool,
    pub ty: Expr,
    pub span: TextRange,
}

/// Statement types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    /// Placeholder left by the parser for a syntactically broken statement.
    Bad(TextRange),
    Decl(GenDecl),
    Empty(TextRange),
    Labeled(LabeledStmt),
    Expr(ExprStmt),
    Send(SendStmt),
    IncDec(IncDecStmt),
    Assign(AssignStmt),
    Go(GoStmt),
    Defer(DeferStmt),
    Return(ReturnStmt),
    Branch(BranchStmt),
    Block(BlockStmt),
    If(IfStmt),
    CaseClause(CaseClause),
    Switch(SwitchStmt),
    TypeSwitch(TypeSwitchStmt),
    CommClause(CommClause),
    Select(SelectStmt),
    For(ForStmt),
    Range(RangeStmt),
}

impl Stmt {
    pub fn span(&self) -> TextRange {
        match self {
            Stmt::Bad(span) | Stmt::Empty(span) => *span,
            Stmt::Decl(s) => s.span,
            Stmt::Labeled(s) => s.span,
            Stmt::Expr(s) => s.span,
            Stmt::Send(s) => s.span,
            Stmt::IncDec(s) => s.span,
            Stmt::Assign(s) => s.span,
            Stmt::Go(s) => s.span,
            Stmt::Defer(s) => s.span,
            Stmt::Return(s) => s.span,
            Stmt::Branch(s) => s.span,
            Stmt::Block(s) => s.span,
            Stmt::If(s) => s.span,
            Stmt::CaseClause(s) => s.span,
            Stmt::Switch(s) => s.span,
            Stmt::TypeSwitch(s) => s.span,
            Stmt::CommClause(s) => s.span,
            Stmt::Select(s) => s.span,
            Stmt::For(s) => s.span,
            Stmt::Range(s) => s.span,
        }
    }

    /// Short node name used in logs and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::Bad(_) => "bad statement",
            Stmt::Decl(_) => "declaration statement",
            Stmt::Empty(_) => "empty statement",
            Stmt::Labeled(_) => "labeled statement",
            Stmt::Expr(_) => "expression statement",
            Stmt::Send(_) => "send statement",
            Stmt::IncDec(_) => "inc/dec statement",
            Stmt::Assign(_) => "assignment",
            Stmt::Go(_) => "go statement",
            Stmt::Defer(_) => "defer statement",
            Stmt::Return(_) => "return statement",
            Stmt::Branch(_) => "branch statement",
            Stmt::Block(_) => "block",
            Stmt::If(_) => "if statement",
            Stmt::CaseClause(_) => "case clause",
            Stmt::Switch(_) => "switch statement",
            Stmt::TypeSwitch(_) => "type switch",
            Stmt::CommClause(_) => "comm clause",
            Stmt::Select(_) => "select statement",
            Stmt::For(_) => "for statement",
            Stmt::Range(_) => "range statement",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledStmt {
    pub label: Ident,
    pub stmt: Box<Stmt>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub x: Expr,
    pub span: TextRange,
}

/// `chan <- value`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendStmt {
    pub chan: Expr,
    pub value: Expr,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncDecStmt {
    pub x: Expr,
    pub op: IncDecOp,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoStmt {
    pub call: CallExpr,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferStmt {
    pub call: CallExpr,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub results: Vec<Expr>,
    pub span: TextRange,
}

/// `break`, `continue`, `goto` or `fallthrough`, with an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchStmt {
    pub kind: BranchKind,
    pub label: Option<Ident>,
    pub span: TextRange,
}

/// `{ stmts }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BlockStmt {
    pub stmts: Vec<Stmt>,
    pub span: TextRange,
}

/// `if init; cond { body } else ...`
///
/// The else branch is either a block or another `if` statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub body: BlockStmt,
    pub else_branch: Option<Box<Stmt>>,
    pub span: TextRange,
}

/// `case list: body`, or `default: body` when `list` is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseClause {
    pub list: Vec<Expr>,
    pub body: Vec<Stmt>,
    pub span: TextRange,
}

impl CaseClause {
    pub fn is_default(&self) -> bool {
        self.list.is_empty()
    }
}

/// Expression switch. Every statement in `body` is a case clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwitchStmt {
    pub init: Option<Box<Stmt>>,
    pub tag: Option<Expr>,
    pub body: BlockStmt,
    pub span: TextRange,
}

/// `switch init; x := y.(type) { ... }`.
///
/// `assign` is either `x := y.(type)` or the bare expression `y.(type)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSwitchStmt {
    pub init: Option<Box<Stmt>>,
    pub assign: Box<Stmt>,
    pub body: BlockStmt,
    pub span: TextRange,
}

/// `case comm: body` in a select, or `default: body` when `comm` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommClause {
    pub comm: Option<Box<Stmt>>,
    pub body: Vec<Stmt>,
    pub span: TextRange,
}

/// Every statement in `body` is a comm clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStmt {
    pub body: BlockStmt,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Option<Box<Stmt>>,
    pub cond: Option<Expr>,
    pub post: Option<Box<Stmt>>,
    pub body: BlockStmt,
    pub span: TextRange,
}

/// `for key, value := range x { body }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeStmt {
    pub key: Option<Expr>,
    pub value: Option<Expr>,
    pub op: Option<AssignOp>,
    pub x: Expr,
    pub body: BlockStmt,
    pub span: TextRange,
}
