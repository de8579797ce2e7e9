//! Integration tests for the lowering pass.

use gopp_lowering::ast::*;
use gopp_lowering::helpers::*;
use gopp_lowering::{lower_tree, print_tree, LowerConfig, LowerError, LowerStats};

fn sprintf(format: &str, args: Vec<Expr>) -> Expr {
    let mut all = vec![string(format)];
    all.extend(args);
    call(selector(ident("fmt"), "Sprintf"), all)
}

#[test]
fn test_many_literals_register_one_import() {
    let stmts = (0..5)
        .map(|i| expr_stmt(interp(vec![text("n="), embed(int(i))])))
        .collect();
    let mut tree = tree(vec![func_decl("main", stmts)]);

    let stats = lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(stats.literals, 5);
    assert_eq!(stats.imports_added, 1);
    assert_eq!(tree.imports.len(), 1);
    assert_eq!(tree.imports.path("fmt"), Some("fmt"));
}

#[test]
fn test_existing_fmt_import_is_kept() {
    let mut tree = tree(vec![var_decl("s", vec![interp(vec![text("x")])])]);
    tree.imports.insert("os", "os");
    tree.imports.insert("fmt", "fmt");

    let stats = lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(stats.imports_added, 0);
    let names: Vec<_> = tree.imports.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["os", "fmt"]);
}

#[test]
fn test_rewrites_literal_in_place() {
    // var s = $"a={x}, b={y:d}"
    let mut tree = tree(vec![var_decl(
        "s",
        vec![interp(vec![
            text("a="),
            embed(ident("x")),
            text(", b="),
            embed_fmt(ident("y"), "d"),
        ])],
    )]);

    lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    let expected = var_decl(
        "s",
        vec![sprintf("a=%v, b=%d", vec![ident("x"), ident("y")])],
    );
    assert_eq!(tree.decls, vec![expected]);
}

#[test]
fn test_empty_literal_lowers_to_format_only() {
    let mut tree = tree(vec![var_decl("s", vec![interp(vec![])])]);
    lower_tree(&mut tree, &LowerConfig::default()).unwrap();
    assert_eq!(tree.decls, vec![var_decl("s", vec![sprintf("", vec![])])]);
    assert!(tree.imports.contains("fmt"));
}

#[test]
fn test_literal_inside_closure_argument() {
    // run(func() { println($"in closure {v}") })
    let closure = func_lit(vec![expr_stmt(call(
        ident("println"),
        vec![interp(vec![text("in closure "), embed(ident("v"))])],
    ))]);
    let mut tree = tree(vec![func_decl(
        "main",
        vec![expr_stmt(call(ident("run"), vec![closure]))],
    )]);

    let stats = lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(stats.literals, 1);
    let expected_closure = func_lit(vec![expr_stmt(call(
        ident("println"),
        vec![sprintf("in closure %v", vec![ident("v")])],
    ))]);
    assert_eq!(
        tree.decls,
        vec![func_decl(
            "main",
            vec![expr_stmt(call(ident("run"), vec![expected_closure]))]
        )]
    );
}

#[test]
fn test_embedded_expression_moves_unchanged() {
    let embedded = binary(
        selector(ident("user"), "Age"),
        BinaryOp::Add,
        call(ident("offset"), vec![int(1)]),
    );
    let mut tree = tree(vec![var_decl(
        "s",
        vec![interp(vec![embed_fmt(embedded.clone(), "5d")])],
    )]);

    lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(
        tree.decls,
        vec![var_decl("s", vec![sprintf("%5d", vec![embedded])])]
    );
}

#[test]
fn test_plain_tree_is_untouched() {
    let original = tree(vec![
        var_decl("greeting", vec![string("hello")]),
        func_decl(
            "main",
            vec![
                define(vec![ident("n")], vec![int(3)]),
                expr_stmt(call(ident("println"), vec![ident("greeting"), ident("n")])),
            ],
        ),
    ]);
    let mut tree = original.clone();

    let stats = lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(stats, LowerStats::default());
    assert_eq!(tree, original);
    assert!(tree.imports.is_empty());
}

#[test]
fn test_malformed_position_resolves_to_line_and_column() {
    let text = "package main\n\nfunc main() {\n\tx := ?\n}\n";
    let mut tree = tree(vec![func_decl(
        "main",
        vec![define(vec![ident("x")], vec![Expr::Bad(span(34, 35))])],
    )]);
    tree.source = SourceFile::new("main.gpp", text);

    let error = lower_tree(&mut tree, &LowerConfig::default()).unwrap_err();

    let start = error.span().unwrap().start();
    let position = tree.source.position(start);
    assert_eq!((position.line, position.column), (4, 7));
    assert!(error.located(&tree.source).starts_with("main.gpp:4:7: "));
}

#[test]
fn test_invalid_config_is_reported() {
    let mut tree = tree(vec![]);
    let config = LowerConfig {
        default_verb: String::new(),
        ..LowerConfig::default()
    };
    assert!(matches!(
        lower_tree(&mut tree, &config),
        Err(LowerError::InvalidConfig(_))
    ));
}

#[test]
fn test_json_round_trip_preserves_tree() {
    let mut tree = tree(vec![func_decl(
        "main",
        vec![expr_stmt(call(
            ident("println"),
            vec![interp(vec![text("n="), embed_fmt(ident("n"), "d")])],
        ))],
    )]);
    tree.imports.insert("os", "os");
    tree.source = SourceFile::new("main.gpp", "package main\n\nfunc main() {}\n");

    let json = serde_json::to_string(&tree).unwrap();
    let decoded: SyntaxTree = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, tree);
}

#[test]
fn test_lowered_tree_prints_as_go() {
    let mut tree = tree(vec![func_decl(
        "main",
        vec![expr_stmt(call(
            ident("println"),
            vec![interp(vec![text("n="), embed_fmt(ident("n"), "d")])],
        ))],
    )]);

    lower_tree(&mut tree, &LowerConfig::default()).unwrap();

    assert_eq!(
        print_tree(&tree).unwrap(),
        "package main\n\nimport \"fmt\"\n\nfunc main() {\n    println(fmt.Sprintf(\"n=%d\", n))\n}\n"
    );
}
