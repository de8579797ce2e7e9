//! Interpolation literal lowering pass.
//!
//! An interpolation literal such as
//!
//! ```text
//! $"a={x}, b={y:d}"
//! ```
//!
//! is parsed into segments `["a=", x, ", b=", (y, "d")]` and rewritten into
//!
//! ```text
//! fmt.Sprintf("a=%v, b=%d", x, y)
//! ```
//!
//! The pass walks every declaration of a [`SyntaxTree`], substitutes each
//! literal in its slot, and registers the `fmt` import once for the file.

use crate::ast::*;
use crate::config::LowerConfig;
use crate::error::LowerResult;
use crate::visitor::mut_walk;
use crate::visitor::transform;
use crate::visitor::MutVisitor;
use tracing::{debug, info};

/// Result of lowering a single interpolation literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Lowered {
    /// The formatting call replacing the literal.
    pub expr: Expr,
    /// Package the call refers to. Every lowered literal needs it imported.
    pub required_import: String,
}

/// Lower one interpolation literal into a formatting call.
///
/// Text segments are appended to the format string verbatim. Each embedded
/// expression contributes `%` plus its directive (or the default verb) and
/// becomes the next call argument, unmodified.
pub fn lower_literal(lit: InterpLit, config: &LowerConfig) -> Lowered {
    let span = lit.span;
    let mut format = String::new();
    // Slot 0 holds the format literal once every segment has been scanned.
    let mut args = Vec::with_capacity(lit.segments.len() + 1);
    args.push(Expr::Bad(span));

    for segment in lit.segments {
        match segment {
            Segment::Text(text) => format.push_str(&text.text),
            Segment::Expr(embedded) => {
                let verb = embedded
                    .directive
                    .as_deref()
                    .filter(|directive| !directive.is_empty())
                    .unwrap_or(&config.default_verb);
                format.push('%');
                format.push_str(verb);
                args.push(embedded.expr);
            }
        }
    }
    args[0] = transform::string_lit(&format, span);

    Lowered {
        expr: transform::call(
            transform::qualified(&config.format_package, &config.format_function, span),
            args,
            span,
        ),
        required_import: config.format_package.clone(),
    }
}

/// State shared by one run of the pass over one file.
///
/// Each tree gets its own context, so independent files can be lowered
/// concurrently.
#[derive(Debug, Clone, Copy)]
pub struct LowerContext<'a> {
    pub config: &'a LowerConfig,
    pub source: &'a SourceFile,
}

impl<'a> LowerContext<'a> {
    pub fn new(config: &'a LowerConfig, source: &'a SourceFile) -> Self {
        LowerContext { config, source }
    }
}

/// Counters reported after a tree has been lowered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LowerStats {
    /// Interpolation literals replaced.
    pub literals: usize,
    /// Entries appended to the import table (0 or 1).
    pub imports_added: usize,
}

/// Visitor replacing every interpolation literal it reaches.
pub struct InterpolationLowering<'a> {
    ctx: LowerContext<'a>,
    imports: &'a mut ImportTable,
    stats: LowerStats,
}

impl<'a> InterpolationLowering<'a> {
    pub fn new(ctx: LowerContext<'a>, imports: &'a mut ImportTable) -> Self {
        InterpolationLowering {
            ctx,
            imports,
            stats: LowerStats::default(),
        }
    }

    pub fn stats(&self) -> LowerStats {
        self.stats
    }

    fn register_import(&mut self, name: &str) {
        if self.imports.ensure(name) {
            self.stats.imports_added += 1;
        }
    }
}

impl MutVisitor for InterpolationLowering<'_> {
    fn visit_expr(&mut self, expr: &mut Expr) -> LowerResult<()> {
        if let Expr::Interp(lit) = &*expr {
            let span = lit.span;
            let segments = lit.segments.len();
            let config = self.ctx.config;
            let required = transform::replace_expr(expr, |old| match old {
                Expr::Interp(lit) => {
                    let lowered = lower_literal(lit, config);
                    (lowered.expr, Some(lowered.required_import))
                }
                other => (other, None),
            });
            if let Some(import) = required {
                self.stats.literals += 1;
                self.register_import(&import);
                debug!(
                    location = %self.ctx.source.location(span),
                    segments,
                    "lowered interpolation literal"
                );
            }
        }
        // The replacement call carries the embedded expressions as
        // arguments; walking it lowers literals nested inside them.
        mut_walk::walk_expr(self, expr)
    }
}

/// Lower every interpolation literal in `tree`.
///
/// Stops at the first malformed node; the tree may then be partially
/// rewritten and should be discarded.
pub fn lower_tree(tree: &mut SyntaxTree, config: &LowerConfig) -> LowerResult<LowerStats> {
    config.validate()?;

    let SyntaxTree {
        imports,
        decls,
        source,
        ..
    } = tree;
    let ctx = LowerContext::new(config, source);
    let mut pass = InterpolationLowering::new(ctx, imports);
    for decl in decls.iter_mut() {
        pass.visit_decl(decl)?;
    }

    let stats = pass.stats();
    info!(
        file = %source.name,
        literals = stats.literals,
        imports_added = stats.imports_added,
        "lowered syntax tree"
    );
    Ok(stats)
}

/// Counts interpolation literals still present in a tree.
#[derive(Debug, Default)]
pub struct InterpolationCounter {
    pub count: usize,
}

impl MutVisitor for InterpolationCounter {
    fn visit_expr(&mut self, expr: &mut Expr) -> LowerResult<()> {
        if matches!(expr, Expr::Interp(_)) {
            self.count += 1;
        }
        mut_walk::walk_expr(self, expr)
    }
}

/// Number of interpolation literals reachable from the tree's declarations.
pub fn count_interpolations(tree: &mut SyntaxTree) -> LowerResult<usize> {
    let mut counter = InterpolationCounter::default();
    counter.visit_tree(tree)?;
    Ok(counter.count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::*;

    fn format_and_args(expr: &Expr) -> (String, Vec<Expr>) {
        let Expr::Call(call) = expr else {
            panic!("expected call, got {:?}", expr);
        };
        let Expr::BasicLit(format) = &call.args[0] else {
            panic!("expected format literal");
        };
        (
            format.string_contents().unwrap().to_string(),
            call.args[1..].to_vec(),
        )
    }

    #[test]
    fn test_lower_literal_segment_order() {
        let lit = interp_lit(vec![
            text("a="),
            embed(ident("x")),
            text(", b="),
            embed_fmt(ident("y"), "d"),
        ]);
        let lowered = lower_literal(lit, &LowerConfig::default());
        let (format, args) = format_and_args(&lowered.expr);
        assert_eq!(format, "a=%v, b=%d");
        assert_eq!(args, vec![ident("x"), ident("y")]);
        assert_eq!(lowered.required_import, "fmt");
    }

    #[test]
    fn test_many_embedded_expressions_follow_format_literal() {
        let names = ["a", "b", "c", "d", "e", "f"];
        let segments = names
            .iter()
            .flat_map(|name| [text(" "), embed(ident(name))])
            .collect();
        let lowered = lower_literal(interp_lit(segments), &LowerConfig::default());
        let Expr::Call(call) = &lowered.expr else {
            panic!("expected call");
        };
        assert_eq!(call.args.len(), names.len() + 1);
        assert_eq!(call.args[0], string(" %v %v %v %v %v %v"));
        let expected: Vec<Expr> = names.iter().map(|name| ident(name)).collect();
        assert_eq!(call.args[1..], expected[..]);
    }

    #[test]
    fn test_lower_literal_calls_sprintf() {
        let lowered = lower_literal(interp_lit(vec![text("hi")]), &LowerConfig::default());
        let Expr::Call(call) = &lowered.expr else {
            panic!("expected call");
        };
        assert_eq!(*call.fun, selector(ident("fmt"), "Sprintf"));
        assert_eq!(call.args.len(), 1);
    }

    #[test]
    fn test_lower_empty_literal() {
        let lowered = lower_literal(interp_lit(vec![]), &LowerConfig::default());
        let (format, args) = format_and_args(&lowered.expr);
        assert_eq!(format, "");
        assert!(args.is_empty());
    }

    #[test]
    fn test_consecutive_text_segments_concatenate() {
        let lit = interp_lit(vec![text("foo"), text("bar"), embed(ident("n"))]);
        let (format, _) = format_and_args(&lower_literal(lit, &LowerConfig::default()).expr);
        assert_eq!(format, "foobar%v");
    }

    #[test]
    fn test_directive_copied_verbatim() {
        let lit = interp_lit(vec![embed_fmt(ident("f"), "08.3zz")]);
        let (format, _) = format_and_args(&lower_literal(lit, &LowerConfig::default()).expr);
        assert_eq!(format, "%08.3zz");
    }

    #[test]
    fn test_empty_directive_uses_default_verb() {
        let lit = interp_lit(vec![embed_fmt(ident("f"), "")]);
        let (format, _) = format_and_args(&lower_literal(lit, &LowerConfig::default()).expr);
        assert_eq!(format, "%v");
    }

    #[test]
    fn test_custom_config_target() {
        let config = LowerConfig {
            format_package: "xfmt".to_string(),
            format_function: "Format".to_string(),
            default_verb: "s".to_string(),
        };
        let lowered = lower_literal(interp_lit(vec![embed(ident("x"))]), &config);
        let Expr::Call(call) = &lowered.expr else {
            panic!("expected call");
        };
        assert_eq!(*call.fun, selector(ident("xfmt"), "Format"));
        assert_eq!(format_and_args(&lowered.expr).0, "%s");
        assert_eq!(lowered.required_import, "xfmt");
    }

    #[test]
    fn test_stats_count_literals_and_single_import() {
        let mut tree = tree(vec![func_decl(
            "main",
            vec![
                expr_stmt(interp(vec![text("one")])),
                expr_stmt(interp(vec![text("two")])),
                expr_stmt(interp(vec![text("three")])),
            ],
        )]);
        let stats = lower_tree(&mut tree, &LowerConfig::default()).unwrap();
        assert_eq!(
            stats,
            LowerStats {
                literals: 3,
                imports_added: 1
            }
        );
        assert_eq!(count_interpolations(&mut tree).unwrap(), 0);
    }

    #[test]
    fn test_invalid_config_rejected_before_walking() {
        let mut tree = tree(vec![func_decl("main", vec![expr_stmt(interp(vec![]))])]);
        let config = LowerConfig {
            format_package: String::new(),
            ..LowerConfig::default()
        };
        assert!(lower_tree(&mut tree, &config).is_err());
        assert_eq!(count_interpolations(&mut tree).unwrap(), 1);
    }
}
