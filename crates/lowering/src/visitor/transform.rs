//! In-place node replacement and node construction helpers.
//!
//! Every child position in the tree is an owned slot (`Expr`, `Box<Expr>`,
//! or an element of a `Vec<Expr>`). Rewriting a node means moving the old
//! value out of its slot, building the replacement from it, and writing the
//! replacement back. The old node is dropped when the closure is done with it.
//!
//! ## Basic Usage
//!
//! ```rust,ignore
//! use gopp_lowering::visitor::transform;
//!
//! // Wrap an expression in parentheses
//! transform::replace_expr(slot, |old| {
//!     let span = old.span();
//!     (transform::paren(old, span), ())
//! });
//! ```

use crate::ast::*;
use text_size::TextRange;

/// Replace the expression in `slot` with the one returned by `f`.
///
/// `f` receives the previous expression by value and may return any extra
/// output alongside the replacement.
pub fn replace_expr<R, F>(slot: &mut Expr, f: F) -> R
where
    F: FnOnce(Expr) -> (Expr, R),
{
    let old = take_expr(slot);
    let (new, output) = f(old);
    *slot = new;
    output
}

/// Move the expression out of `slot`, leaving a bad-expression placeholder
/// with the same span.
pub fn take_expr(slot: &mut Expr) -> Expr {
    let placeholder = Expr::Bad(slot.span());
    std::mem::replace(slot, placeholder)
}

/// Create an identifier expression.
pub fn name(id: &str, span: TextRange) -> Expr {
    Expr::Ident(Ident::new(id, span))
}

/// Create a qualified identifier `package.member`.
pub fn qualified(package: &str, member: &str, span: TextRange) -> Expr {
    Expr::Selector(SelectorExpr {
        x: Box::new(name(package, span)),
        sel: Ident::new(member, span),
        span,
    })
}

/// Create a double-quoted string literal around `contents`.
pub fn string_lit(contents: &str, span: TextRange) -> Expr {
    Expr::BasicLit(BasicLit::string(contents, span))
}

/// Create a call expression.
pub fn call(fun: Expr, args: Vec<Expr>, span: TextRange) -> Expr {
    Expr::Call(CallExpr {
        fun: Box::new(fun),
        args,
        has_ellipsis: false,
        span,
    })
}

/// Create a parenthesized expression.
pub fn paren(x: Expr, span: TextRange) -> Expr {
    Expr::Paren(ParenExpr {
        x: Box::new(x),
        span,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_expr_swaps_slot_and_returns_output() {
        let mut slot = name("x", TextRange::default());
        let old_name = replace_expr(&mut slot, |old| {
            let span = old.span();
            let label = match &old {
                Expr::Ident(id) => id.name.clone(),
                _ => String::new(),
            };
            (paren(old, span), label)
        });
        assert_eq!(old_name, "x");
        assert!(matches!(slot, Expr::Paren(_)));
    }

    #[test]
    fn test_replace_expr_inside_vec_leaves_siblings() {
        let span = TextRange::default();
        let mut args = vec![name("a", span), name("b", span), name("c", span)];
        replace_expr(&mut args[1], |_| (string_lit("b", span), ()));
        assert_eq!(args[0], name("a", span));
        assert_eq!(args[1], string_lit("b", span));
        assert_eq!(args[2], name("c", span));
    }

    #[test]
    fn test_take_expr_leaves_placeholder() {
        let span = TextRange::default();
        let mut slot = qualified("fmt", "Sprintf", span);
        let taken = take_expr(&mut slot);
        assert!(matches!(taken, Expr::Selector(_)));
        assert_eq!(slot, Expr::Bad(span));
    }
}
