//! Expression AST nodes.
//!
//! Go models types as expressions, so the type forms (`[]T`, `map[K]V`,
//! `chan T`, `func(...)`, `struct{...}`, `interface{...}`) live here too.

use super::nodes::BlockStmt;
use super::ops::{BinaryOp, ChanDir, UnaryOp};
use serde::{Deserialize, Serialize};
use text_size::TextRange;

/// Expression types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Placeholder left by the parser for a syntactically broken expression.
    Bad(TextRange),
    Ident(Ident),
    Ellipsis(EllipsisExpr),
    BasicLit(BasicLit),
    FuncLit(FuncLit),
    CompositeLit(CompositeLit),
    Paren(ParenExpr),
    Selector(SelectorExpr),
    Index(IndexExpr),
    Slice(SliceExpr),
    TypeAssert(TypeAssertExpr),
    Call(CallExpr),
    Star(StarExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    KeyValue(KeyValueExpr),
    ArrayType(ArrayType),
    StructType(StructType),
    FuncType(FuncType),
    InterfaceType(InterfaceType),
    MapType(MapType),
    ChanType(ChanType),
    /// Interpolation literal from the extended syntax.
    Interp(InterpLit),
}

impl Expr {
    pub fn span(&self) -> TextRange {
        match self {
            Expr::Bad(span) => *span,
            Expr::Ident(e) => e.span,
            Expr::Ellipsis(e) => e.span,
            Expr::BasicLit(e) => e.span,
            Expr::FuncLit(e) => e.span,
            Expr::CompositeLit(e) => e.span,
            Expr::Paren(e) => e.span,
            Expr::Selector(e) => e.span,
            Expr::Index(e) => e.span,
            Expr::Slice(e) => e.span,
            Expr::TypeAssert(e) => e.span,
            Expr::Call(e) => e.span,
            Expr::Star(e) => e.span,
            Expr::Unary(e) => e.span,
            Expr::Binary(e) => e.span,
            Expr::KeyValue(e) => e.span,
            Expr::ArrayType(e) => e.span,
            Expr::StructType(e) => e.span,
            Expr::FuncType(e) => e.span,
            Expr::InterfaceType(e) => e.span,
            Expr::MapType(e) => e.span,
            Expr::ChanType(e) => e.span,
            Expr::Interp(e) => e.span,
        }
    }

    /// Short node name used in logs and diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Bad(_) => "bad expression",
            Expr::Ident(_) => "identifier",
            Expr::Ellipsis(_) => "ellipsis",
            Expr::BasicLit(_) => "basic literal",
            Expr::FuncLit(_) => "function literal",
            Expr::CompositeLit(_) => "composite literal",
            Expr::Paren(_) => "parenthesized expression",
            Expr::Selector(_) => "selector",
            Expr::Index(_) => "index expression",
            Expr::Slice(_) => "slice expression",
            Expr::TypeAssert(_) => "type assertion",
            Expr::Call(_) => "call",
            Expr::Star(_) => "star expression",
            Expr::Unary(_) => "unary expression",
            Expr::Binary(_) => "binary expression",
            Expr::KeyValue(_) => "key-value pair",
            Expr::ArrayType(_) => "array type",
            Expr::StructType(_) => "struct type",
            Expr::FuncType(_) => "func type",
            Expr::InterfaceType(_) => "interface type",
            Expr::MapType(_) => "map type",
            Expr::ChanType(_) => "chan type",
            Expr::Interp(_) => "interpolation literal",
        }
    }
}

/// An identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ident {
    pub name: String,
    pub span: TextRange,
}

impl Ident {
    pub fn new(name: impl Into<String>, span: TextRange) -> Self {
        Ident {
            name: name.into(),
            span,
        }
    }
}

/// `...T` in a parameter list or `[...]T` array length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipsisExpr {
    pub elt: Option<Box<Expr>>,
    pub span: TextRange,
}

/// Kind of a basic literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitKind {
    Int,
    Float,
    Imag,
    Char,
    String,
}

/// A basic literal. `value` holds the source spelling, quotes included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    pub kind: LitKind,
    pub value: String,
    pub span: TextRange,
}

impl BasicLit {
    /// Interpreted string literal wrapping `contents` in double quotes as-is.
    pub fn string(contents: &str, span: TextRange) -> Self {
        let mut value = String::with_capacity(contents.len() + 2);
        value.push('"');
        value.push_str(contents);
        value.push('"');
        BasicLit {
            kind: LitKind::String,
            value,
            span,
        }
    }

    /// The text between the quotes of a string literal.
    pub fn string_contents(&self) -> Option<&str> {
        if self.kind != LitKind::String || self.value.len() < 2 {
            return None;
        }
        let quote = self.value.chars().next()?;
        if (quote == '"' || quote == '`') && self.value.ends_with(quote) {
            Some(&self.value[1..self.value.len() - 1])
        } else {
            None
        }
    }
}

/// Closure: `func(params) results { body }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncLit {
    pub ty: FuncType,
    pub body: BlockStmt,
    pub span: TextRange,
}

/// `T{elts}`; the type is absent for elided inner literals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeLit {
    pub ty: Option<Box<Expr>>,
    pub elts: Vec<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub x: Box<Expr>,
    pub span: TextRange,
}

/// `x.sel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub x: Box<Expr>,
    pub sel: Ident,
    pub span: TextRange,
}

/// `x[i]`, or `x[T1, T2]` for generic instantiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexExpr {
    pub x: Box<Expr>,
    pub indices: Vec<Expr>,
    pub span: TextRange,
}

/// `x[low:high]` or `x[low:high:max]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliceExpr {
    pub x: Box<Expr>,
    pub low: Option<Box<Expr>>,
    pub high: Option<Box<Expr>>,
    pub max: Option<Box<Expr>>,
    pub slice3: bool,
    pub span: TextRange,
}

/// `x.(T)`; `ty` is `None` for the `x.(type)` guard of a type switch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAssertExpr {
    pub x: Box<Expr>,
    pub ty: Option<Box<Expr>>,
    pub span: TextRange,
}

/// `fun(args)`, `fun(args...)` when `has_ellipsis` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub fun: Box<Expr>,
    pub args: Vec<Expr>,
    pub has_ellipsis: bool,
    pub span: TextRange,
}

/// `*x`, either a dereference or a pointer type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarExpr {
    pub x: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub x: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub x: Box<Expr>,
    pub op: BinaryOp,
    pub y: Box<Expr>,
    pub span: TextRange,
}

/// `key: value` inside a composite literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValueExpr {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub span: TextRange,
}

/// `[len]elt`, or `[]elt` when `len` is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayType {
    pub len: Option<Box<Expr>>,
    pub elt: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructType {
    pub fields: FieldList,
    pub span: TextRange,
}

/// Signature of a function, method or closure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncType {
    pub type_params: Option<FieldList>,
    pub params: FieldList,
    pub results: Option<FieldList>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceType {
    pub methods: FieldList,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapType {
    pub key: Box<Expr>,
    pub value: Box<Expr>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChanType {
    pub dir: ChanDir,
    pub value: Box<Expr>,
    pub span: TextRange,
}

/// Parameter, result, struct field or interface method list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
    pub span: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: Expr,
    pub tag: Option<BasicLit>,
    pub span: TextRange,
}

/// An interpolation literal: text interleaved with embedded expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterpLit {
    pub segments: Vec<Segment>,
    pub span: TextRange,
}

/// One piece of an interpolation literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    Text(TextSegment),
    Expr(ExprSegment),
}

/// Literal text, kept in its source spelling (escapes unprocessed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSegment {
    pub text: String,
    pub span: TextRange,
}

/// An embedded expression with an optional format directive such as `d`
/// or `08.3f` (written without the leading `%`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprSegment {
    pub expr: Expr,
    pub directive: Option<String>,
    pub span: TextRange,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal_quotes_contents() {
        let lit = BasicLit::string("a=%v", TextRange::default());
        assert_eq!(lit.value, "\"a=%v\"");
        assert_eq!(lit.string_contents(), Some("a=%v"));
    }

    #[test]
    fn test_string_contents_rejects_other_kinds() {
        let lit = BasicLit {
            kind: LitKind::Int,
            value: "42".to_string(),
            span: TextRange::default(),
        };
        assert_eq!(lit.string_contents(), None);

        let raw = BasicLit {
            kind: LitKind::String,
            value: "`raw`".to_string(),
            span: TextRange::default(),
        };
        assert_eq!(raw.string_contents(), Some("raw"));
    }
}
