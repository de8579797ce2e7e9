//! Go source printer.
//!
//! Renders a lowered [`SyntaxTree`] as Go source text. The output is
//! indented with four spaces and close to what `gofmt` produces for simple
//! code, but no attempt is made at column alignment or comment preservation.
//!
//! The printer refuses trees the pass has not finished with: an interpolation
//! literal yields [`LowerError::UnloweredInterpolation`], and parser error
//! nodes or misplaced clauses yield [`LowerError::MalformedTree`].

use crate::ast::*;
use crate::error::{LowerError, LowerResult, MalformedReason};

/// One indentation level, spaces rather than tabs.
const INDENT: &str = "    ";
/// Precedence of unary and star expressions.
const UNARY_PREC: u8 = 6;
/// Precedence of primary expressions (operands, calls, selectors).
const PRIMARY_PREC: u8 = 7;

/// Render a whole file.
pub fn print_tree(tree: &SyntaxTree) -> LowerResult<String> {
    let mut printer = Printer::new();
    printer.tree(tree)?;
    Ok(printer.finish())
}

/// Render a single expression.
pub fn print_expr(expr: &Expr) -> LowerResult<String> {
    let mut printer = Printer::new();
    printer.expr(expr)?;
    Ok(printer.finish())
}

fn expr_prec(expr: &Expr) -> u8 {
    match expr {
        Expr::Binary(binary) => binary.op.precedence(),
        Expr::Unary(_) | Expr::Star(_) => UNARY_PREC,
        Expr::KeyValue(_) => 0,
        _ => PRIMARY_PREC,
    }
}

/// Whether `outer` followed directly by `inner` lexes as a different token.
fn operators_fuse(outer: UnaryOp, inner: UnaryOp) -> bool {
    matches!(
        (outer, inner),
        (UnaryOp::Neg, UnaryOp::Neg)
            | (UnaryOp::Plus, UnaryOp::Plus)
            | (UnaryOp::Addr, UnaryOp::Addr)
            | (UnaryOp::Addr, UnaryOp::Xor)
    )
}

/// Import spec as written inside an `import` declaration.
fn import_spec(name: &str, path: &str) -> String {
    let last = path.rsplit('/').next().unwrap_or(path);
    if name == last {
        format!("\"{}\"", path)
    } else {
        format!("{} \"{}\"", name, path)
    }
}

struct Printer {
    out: String,
    indent: usize,
}

impl Printer {
    fn new() -> Self {
        Printer {
            out: String::new(),
            indent: 0,
        }
    }

    fn finish(self) -> String {
        self.out
    }

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        self.out.push('\n');
        for _ in 0..self.indent {
            self.out.push_str(INDENT);
        }
    }

    fn tree(&mut self, tree: &SyntaxTree) -> LowerResult<()> {
        self.write("package ");
        self.write(&tree.package.name);
        self.write("\n");

        match tree.imports.len() {
            0 => {}
            1 => {
                for (name, path) in tree.imports.iter() {
                    self.write("\nimport ");
                    self.write(&import_spec(name, path));
                    self.write("\n");
                }
            }
            _ => {
                self.write("\nimport (\n");
                for (name, path) in tree.imports.iter() {
                    self.write(INDENT);
                    self.write(&import_spec(name, path));
                    self.write("\n");
                }
                self.write(")\n");
            }
        }

        for decl in &tree.decls {
            self.write("\n");
            self.decl(decl)?;
            self.write("\n");
        }
        Ok(())
    }

    fn decl(&mut self, decl: &Decl) -> LowerResult<()> {
        match decl {
            Decl::Func(func) => self.func_decl(func),
            Decl::Gen(gen) => self.gen_decl(gen),
            Decl::Bad(span) => Err(LowerError::malformed(
                *span,
                MalformedReason::ParserErrorNode("declaration"),
            )),
        }
    }

    fn func_decl(&mut self, func: &FuncDecl) -> LowerResult<()> {
        self.write("func ");
        if let Some(recv) = &func.recv {
            self.write("(");
            self.fields(recv)?;
            self.write(") ");
        }
        self.write(&func.name.name);
        self.signature(&func.ty)?;
        if let Some(body) = &func.body {
            self.write(" ");
            self.block(body)?;
        }
        Ok(())
    }

    fn gen_decl(&mut self, gen: &GenDecl) -> LowerResult<()> {
        self.write(gen.keyword.as_str());
        if gen.grouped || gen.specs.len() > 1 {
            self.write(" (");
            self.indent += 1;
            for spec in &gen.specs {
                self.newline();
                self.spec(spec)?;
            }
            self.indent -= 1;
            self.newline();
            self.write(")");
        } else {
            for spec in &gen.specs {
                self.write(" ");
                self.spec(spec)?;
            }
        }
        Ok(())
    }

    fn spec(&mut self, spec: &Spec) -> LowerResult<()> {
        match spec {
            Spec::Value(value) => {
                self.idents(&value.names);
                if let Some(ty) = &value.ty {
                    self.write(" ");
                    self.expr(ty)?;
                }
                if !value.values.is_empty() {
                    self.write(" = ");
                    self.exprs(&value.values)?;
                }
            }
            Spec::Type(ty) => {
                self.write(&ty.name.name);
                if let Some(params) = &ty.type_params {
                    self.write("[");
                    self.fields(params)?;
                    self.write("]");
                }
                self.write(if ty.assign { " = " } else { " " });
                self.expr(&ty.ty)?;
            }
        }
        Ok(())
    }

    /// `[T any](params) results`, without the `func` keyword.
    fn signature(&mut self, ty: &FuncType) -> LowerResult<()> {
        if let Some(params) = &ty.type_params {
            self.write("[");
            self.fields(params)?;
            self.write("]");
        }
        self.write("(");
        self.fields(&ty.params)?;
        self.write(")");
        if let Some(results) = &ty.results {
            match results.fields.as_slice() {
                [] => {}
                [single] if single.names.is_empty() => {
                    self.write(" ");
                    self.expr(&single.ty)?;
                }
                _ => {
                    self.write(" (");
                    self.fields(results)?;
                    self.write(")");
                }
            }
        }
        Ok(())
    }

    /// Comma-separated fields of a parameter, result or type parameter list.
    fn fields(&mut self, list: &FieldList) -> LowerResult<()> {
        for (i, field) in list.fields.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if !field.names.is_empty() {
                self.idents(&field.names);
                self.write(" ");
            }
            self.expr(&field.ty)?;
        }
        Ok(())
    }

    fn idents(&mut self, names: &[Ident]) {
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(&name.name);
        }
    }

    fn block(&mut self, block: &BlockStmt) -> LowerResult<()> {
        self.write("{");
        self.indent += 1;
        self.stmt_lines(&block.stmts)?;
        self.indent -= 1;
        self.newline();
        self.write("}");
        Ok(())
    }

    fn stmt_lines(&mut self, stmts: &[Stmt]) -> LowerResult<()> {
        for stmt in stmts {
            if matches!(stmt, Stmt::Empty(_)) {
                continue;
            }
            self.newline();
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn opt_simple_stmt(&mut self, stmt: &Option<Box<Stmt>>) -> LowerResult<()> {
        if let Some(stmt) = stmt {
            self.stmt(stmt)?;
        }
        Ok(())
    }

    fn stmt(&mut self, stmt: &Stmt) -> LowerResult<()> {
        match stmt {
            Stmt::Bad(span) => {
                return Err(LowerError::malformed(
                    *span,
                    MalformedReason::ParserErrorNode("statement"),
                ))
            }
            Stmt::Decl(gen) => self.gen_decl(gen)?,
            Stmt::Empty(_) => {}
            Stmt::Labeled(labeled) => {
                self.write(&labeled.label.name);
                self.write(":");
                if !matches!(*labeled.stmt, Stmt::Empty(_)) {
                    self.newline();
                    self.stmt(&labeled.stmt)?;
                }
            }
            Stmt::Expr(expr) => self.expr(&expr.x)?,
            Stmt::Send(send) => {
                self.expr(&send.chan)?;
                self.write(" <- ");
                self.expr(&send.value)?;
            }
            Stmt::IncDec(inc) => {
                self.expr(&inc.x)?;
                self.write(inc.op.as_str());
            }
            Stmt::Assign(assign) => {
                self.exprs(&assign.lhs)?;
                self.write(" ");
                self.write(assign.op.as_str());
                self.write(" ");
                self.exprs(&assign.rhs)?;
            }
            Stmt::Go(go) => {
                self.write("go ");
                self.call(&go.call)?;
            }
            Stmt::Defer(defer) => {
                self.write("defer ");
                self.call(&defer.call)?;
            }
            Stmt::Return(ret) => {
                self.write("return");
                if !ret.results.is_empty() {
                    self.write(" ");
                    self.exprs(&ret.results)?;
                }
            }
            Stmt::Branch(branch) => {
                self.write(branch.kind.as_str());
                if let Some(label) = &branch.label {
                    self.write(" ");
                    self.write(&label.name);
                }
            }
            Stmt::Block(block) => self.block(block)?,
            Stmt::If(if_stmt) => {
                self.write("if ");
                if let Some(init) = &if_stmt.init {
                    self.stmt(init)?;
                    self.write("; ");
                }
                self.expr(&if_stmt.cond)?;
                self.write(" ");
                self.block(&if_stmt.body)?;
                if let Some(else_branch) = &if_stmt.else_branch {
                    self.write(" else ");
                    self.stmt(else_branch)?;
                }
            }
            Stmt::CaseClause(clause) => self.case_clause(clause)?,
            Stmt::Switch(switch) => {
                self.write("switch ");
                if let Some(init) = &switch.init {
                    self.stmt(init)?;
                    self.write("; ");
                }
                if let Some(tag) = &switch.tag {
                    self.expr(tag)?;
                    self.write(" ");
                }
                self.case_body(&switch.body)?;
            }
            Stmt::TypeSwitch(switch) => {
                self.write("switch ");
                if let Some(init) = &switch.init {
                    self.stmt(init)?;
                    self.write("; ");
                }
                match &*switch.assign {
                    Stmt::Assign(_) | Stmt::Expr(_) => self.stmt(&switch.assign)?,
                    other => {
                        return Err(LowerError::malformed(
                            other.span(),
                            MalformedReason::InvalidTypeSwitchGuard(other.kind_name()),
                        ))
                    }
                }
                self.write(" ");
                self.case_body(&switch.body)?;
            }
            Stmt::CommClause(clause) => self.comm_clause(clause)?,
            Stmt::Select(select) => {
                self.write("select {");
                for stmt in &select.body.stmts {
                    match stmt {
                        Stmt::CommClause(clause) => {
                            self.newline();
                            self.comm_clause(clause)?;
                        }
                        other => {
                            return Err(LowerError::malformed(
                                other.span(),
                                MalformedReason::NotACommClause(other.kind_name()),
                            ))
                        }
                    }
                }
                self.newline();
                self.write("}");
            }
            Stmt::For(for_stmt) => {
                self.write("for ");
                if for_stmt.init.is_some() || for_stmt.post.is_some() {
                    self.opt_simple_stmt(&for_stmt.init)?;
                    self.write("; ");
                    if let Some(cond) = &for_stmt.cond {
                        self.expr(cond)?;
                    }
                    self.write("; ");
                    self.opt_simple_stmt(&for_stmt.post)?;
                    self.write(" ");
                } else if let Some(cond) = &for_stmt.cond {
                    self.expr(cond)?;
                    self.write(" ");
                }
                self.block(&for_stmt.body)?;
            }
            Stmt::Range(range) => {
                self.write("for ");
                if let Some(key) = &range.key {
                    self.expr(key)?;
                    if let Some(value) = &range.value {
                        self.write(", ");
                        self.expr(value)?;
                    }
                    self.write(" ");
                    self.write(range.op.unwrap_or(AssignOp::Define).as_str());
                    self.write(" ");
                }
                self.write("range ");
                self.expr(&range.x)?;
                self.write(" ");
                self.block(&range.body)?;
            }
        }
        Ok(())
    }

    /// Body of an expression or type switch; clauses sit at the switch's
    /// own indentation.
    fn case_body(&mut self, body: &BlockStmt) -> LowerResult<()> {
        self.write("{");
        for stmt in &body.stmts {
            match stmt {
                Stmt::CaseClause(clause) => {
                    self.newline();
                    self.case_clause(clause)?;
                }
                other => {
                    return Err(LowerError::malformed(
                        other.span(),
                        MalformedReason::NotACaseClause(other.kind_name()),
                    ))
                }
            }
        }
        self.newline();
        self.write("}");
        Ok(())
    }

    fn case_clause(&mut self, clause: &CaseClause) -> LowerResult<()> {
        if clause.is_default() {
            self.write("default:");
        } else {
            self.write("case ");
            self.exprs(&clause.list)?;
            self.write(":");
        }
        self.indent += 1;
        self.stmt_lines(&clause.body)?;
        self.indent -= 1;
        Ok(())
    }

    fn comm_clause(&mut self, clause: &CommClause) -> LowerResult<()> {
        match &clause.comm {
            Some(comm) => {
                self.write("case ");
                self.stmt(comm)?;
                self.write(":");
            }
            None => self.write("default:"),
        }
        self.indent += 1;
        self.stmt_lines(&clause.body)?;
        self.indent -= 1;
        Ok(())
    }

    fn exprs(&mut self, exprs: &[Expr]) -> LowerResult<()> {
        for (i, expr) in exprs.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.expr(expr)?;
        }
        Ok(())
    }

    fn expr(&mut self, expr: &Expr) -> LowerResult<()> {
        self.expr_min(expr, 0)
    }

    /// Print `expr`, parenthesized if it binds looser than `min`.
    fn expr_min(&mut self, expr: &Expr, min: u8) -> LowerResult<()> {
        if expr_prec(expr) < min {
            self.write("(");
            self.expr_min(expr, 0)?;
            self.write(")");
            return Ok(());
        }

        match expr {
            Expr::Bad(span) => {
                return Err(LowerError::malformed(
                    *span,
                    MalformedReason::ParserErrorNode("expression"),
                ))
            }
            Expr::Interp(lit) => {
                return Err(LowerError::UnloweredInterpolation { span: lit.span })
            }
            Expr::Ident(id) => self.write(&id.name),
            Expr::Ellipsis(ellipsis) => {
                self.write("...");
                if let Some(elt) = &ellipsis.elt {
                    self.expr(elt)?;
                }
            }
            Expr::BasicLit(lit) => self.write(&lit.value),
            Expr::FuncLit(func) => {
                self.write("func");
                self.signature(&func.ty)?;
                self.write(" ");
                self.block(&func.body)?;
            }
            Expr::CompositeLit(lit) => {
                if let Some(ty) = &lit.ty {
                    self.expr_min(ty, PRIMARY_PREC)?;
                }
                self.write("{");
                self.exprs(&lit.elts)?;
                self.write("}");
            }
            Expr::Paren(paren) => {
                self.write("(");
                self.expr(&paren.x)?;
                self.write(")");
            }
            Expr::Selector(selector) => {
                self.expr_min(&selector.x, PRIMARY_PREC)?;
                self.write(".");
                self.write(&selector.sel.name);
            }
            Expr::Index(index) => {
                self.expr_min(&index.x, PRIMARY_PREC)?;
                self.write("[");
                self.exprs(&index.indices)?;
                self.write("]");
            }
            Expr::Slice(slice) => {
                self.expr_min(&slice.x, PRIMARY_PREC)?;
                self.write("[");
                if let Some(low) = &slice.low {
                    self.expr(low)?;
                }
                self.write(":");
                if let Some(high) = &slice.high {
                    self.expr(high)?;
                }
                if slice.slice3 {
                    self.write(":");
                    if let Some(max) = &slice.max {
                        self.expr(max)?;
                    }
                }
                self.write("]");
            }
            Expr::TypeAssert(assert) => {
                self.expr_min(&assert.x, PRIMARY_PREC)?;
                self.write(".(");
                match &assert.ty {
                    Some(ty) => self.expr(ty)?,
                    None => self.write("type"),
                }
                self.write(")");
            }
            Expr::Call(call) => self.call(call)?,
            Expr::Star(star) => {
                self.write("*");
                self.expr_min(&star.x, UNARY_PREC)?;
            }
            Expr::Unary(unary) => {
                self.write(unary.op.as_str());
                // `- -x` and `& &x` must not fuse into `--` or `&&`.
                if let Expr::Unary(inner) = &*unary.x {
                    if operators_fuse(unary.op, inner.op) {
                        self.write(" ");
                    }
                }
                self.expr_min(&unary.x, UNARY_PREC)?;
            }
            Expr::Binary(binary) => {
                let prec = binary.op.precedence();
                self.expr_min(&binary.x, prec)?;
                self.write(" ");
                self.write(binary.op.as_str());
                self.write(" ");
                self.expr_min(&binary.y, prec + 1)?;
            }
            Expr::KeyValue(kv) => {
                self.expr(&kv.key)?;
                self.write(": ");
                self.expr(&kv.value)?;
            }
            Expr::ArrayType(array) => {
                self.write("[");
                if let Some(len) = &array.len {
                    self.expr(len)?;
                }
                self.write("]");
                self.expr(&array.elt)?;
            }
            Expr::StructType(st) => {
                self.write("struct");
                self.member_block(&st.fields, false)?;
            }
            Expr::FuncType(func) => {
                self.write("func");
                self.signature(func)?;
            }
            Expr::InterfaceType(iface) => {
                self.write("interface");
                self.member_block(&iface.methods, true)?;
            }
            Expr::MapType(map) => {
                self.write("map[");
                self.expr(&map.key)?;
                self.write("]");
                self.expr(&map.value)?;
            }
            Expr::ChanType(chan) => {
                self.write(match chan.dir {
                    ChanDir::Both => "chan ",
                    ChanDir::Send => "chan<- ",
                    ChanDir::Recv => "<-chan ",
                });
                self.expr(&chan.value)?;
            }
        }
        Ok(())
    }

    fn call(&mut self, call: &CallExpr) -> LowerResult<()> {
        self.expr_min(&call.fun, PRIMARY_PREC)?;
        self.write("(");
        self.exprs(&call.args)?;
        if call.has_ellipsis {
            self.write("...");
        }
        self.write(")");
        Ok(())
    }

    /// `{ ... }` of a struct or interface type, one member per line.
    fn member_block(&mut self, list: &FieldList, methods: bool) -> LowerResult<()> {
        if list.fields.is_empty() {
            self.write("{}");
            return Ok(());
        }
        self.write(" {");
        self.indent += 1;
        for field in &list.fields {
            self.newline();
            match (&field.ty, field.names.as_slice()) {
                (Expr::FuncType(sig), [name]) if methods => {
                    self.write(&name.name);
                    self.signature(sig)?;
                }
                (ty, names) => {
                    if !names.is_empty() {
                        self.idents(names);
                        self.write(" ");
                    }
                    self.expr(ty)?;
                }
            }
            if let Some(tag) = &field.tag {
                self.write(" ");
                self.write(&tag.value);
            }
        }
        self.indent -= 1;
        self.newline();
        self.write("}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::*;

    #[test]
    fn test_print_hello_world() {
        let mut tree = tree(vec![func_decl(
            "main",
            vec![expr_stmt(call(
                selector(ident("fmt"), "Println"),
                vec![string("hello")],
            ))],
        )]);
        tree.imports.ensure("fmt");
        assert_eq!(
            print_tree(&tree).unwrap(),
            "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"hello\")\n}\n"
        );
    }

    #[test]
    fn test_print_grouped_imports_with_alias() {
        let mut tree = tree(vec![]);
        tree.imports.ensure("fmt");
        tree.imports.insert("str", "strings");
        tree.imports.insert("json", "encoding/json");
        assert_eq!(
            print_tree(&tree).unwrap(),
            "package main\n\nimport (\n    \"fmt\"\n    str \"strings\"\n    \"encoding/json\"\n)\n"
        );
    }

    #[test]
    fn test_binary_parentheses_follow_precedence() {
        let sum = binary(ident("a"), BinaryOp::Add, ident("b"));
        let product = binary(sum.clone(), BinaryOp::Mul, ident("c"));
        assert_eq!(print_expr(&product).unwrap(), "(a + b) * c");

        let left_assoc = binary(ident("a"), BinaryOp::Sub, sum);
        assert_eq!(print_expr(&left_assoc).unwrap(), "a - (a + b)");

        let tight = binary(
            ident("a"),
            BinaryOp::Add,
            binary(ident("b"), BinaryOp::Mul, ident("c")),
        );
        assert_eq!(print_expr(&tight).unwrap(), "a + b * c");
    }

    #[test]
    fn test_unary_operand_parenthesized() {
        let neg = unary(UnaryOp::Neg, binary(ident("x"), BinaryOp::Add, int(1)));
        assert_eq!(print_expr(&neg).unwrap(), "-(x + 1)");
        assert_eq!(print_expr(&unary(UnaryOp::Not, ident("ok"))).unwrap(), "!ok");
    }

    #[test]
    fn test_nested_unary_operators_stay_separate() {
        let double_neg = unary(UnaryOp::Neg, unary(UnaryOp::Neg, ident("x")));
        assert_eq!(print_expr(&double_neg).unwrap(), "- -x");

        let double_plus = unary(UnaryOp::Plus, unary(UnaryOp::Plus, ident("x")));
        assert_eq!(print_expr(&double_plus).unwrap(), "+ +x");

        let addr_of_addr = unary(UnaryOp::Addr, unary(UnaryOp::Addr, ident("x")));
        assert_eq!(print_expr(&addr_of_addr).unwrap(), "& &x");

        let addr_of_complement = unary(UnaryOp::Addr, unary(UnaryOp::Xor, ident("x")));
        assert_eq!(print_expr(&addr_of_complement).unwrap(), "& ^x");

        let neg_not = unary(UnaryOp::Neg, unary(UnaryOp::Not, ident("ok")));
        assert_eq!(print_expr(&neg_not).unwrap(), "-!ok");
    }

    #[test]
    fn test_refuses_interpolation() {
        let tree = tree(vec![var_decl("s", vec![interp(vec![text("hi")])])]);
        assert!(matches!(
            print_tree(&tree),
            Err(LowerError::UnloweredInterpolation { .. })
        ));
    }

    #[test]
    fn test_refuses_bad_nodes() {
        let tree = tree(vec![var_decl("s", vec![bad_expr()])]);
        assert!(matches!(
            print_tree(&tree),
            Err(LowerError::MalformedTree { .. })
        ));
    }

    #[test]
    fn test_switch_clauses_align_with_keyword() {
        let switch = Stmt::Switch(SwitchStmt {
            init: None,
            tag: Some(ident("x")),
            body: block(vec![
                case_clause(vec![int(1), int(2)], vec![ret(vec![])]),
                case_clause(vec![], vec![]),
            ]),
            span: span(0, 0),
        });
        let tree = tree(vec![func_decl("f", vec![switch])]);
        assert_eq!(
            print_tree(&tree).unwrap(),
            "package main\n\nfunc f() {\n    switch x {\n    case 1, 2:\n        return\n    default:\n    }\n}\n"
        );
    }

    #[test]
    fn test_for_and_range_forms() {
        let three_clause = Stmt::For(ForStmt {
            init: Some(Box::new(define(vec![ident("i")], vec![int(0)]))),
            cond: Some(binary(ident("i"), BinaryOp::Lss, int(3))),
            post: Some(Box::new(Stmt::IncDec(IncDecStmt {
                x: ident("i"),
                op: IncDecOp::Inc,
                span: span(0, 0),
            }))),
            body: block(vec![]),
            span: span(0, 0),
        });
        let range = Stmt::Range(RangeStmt {
            key: Some(ident("k")),
            value: Some(ident("v")),
            op: Some(AssignOp::Define),
            x: ident("m"),
            body: block(vec![]),
            span: span(0, 0),
        });
        let tree = tree(vec![func_decl("f", vec![three_clause, range])]);
        let printed = print_tree(&tree).unwrap();
        assert!(printed.contains("    for i := 0; i < 3; i++ {\n    }\n"));
        assert!(printed.contains("    for k, v := range m {\n    }\n"));
    }
}
