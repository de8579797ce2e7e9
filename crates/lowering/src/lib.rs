//! gopp: lowering of interpolation literals in extended Go source.
//!
//! The extended syntax adds one construct to Go, the interpolation literal:
//! a string mixing literal text with embedded expressions, each carrying an
//! optional format directive. This crate rewrites every such literal in a
//! parsed syntax tree into a `fmt.Sprintf` call and registers the `fmt`
//! import exactly once per file.
//!
//! The crate provides:
//! - A Go syntax tree with the interpolation literal as an extra expression kind
//! - A mutable visitor that reaches every statement and expression slot
//! - The lowering pass itself, with per-file statistics
//! - Parallel lowering of independent files
//! - A Go source printer for lowered trees
//!
//! Lexing and parsing the extended syntax happen elsewhere; trees arrive
//! already built (the CLI reads them as JSON).
//!
//! # Example
//!
//! ```no_run
//! use gopp_lowering::helpers::*;
//! use gopp_lowering::{lower_tree, print_tree, LowerConfig};
//!
//! // func main() { println($"n={n:d}") }
//! let mut tree = tree(vec![func_decl(
//!     "main",
//!     vec![expr_stmt(call(
//!         ident("println"),
//!         vec![interp(vec![text("n="), embed_fmt(ident("n"), "d")])],
//!     ))],
//! )]);
//!
//! let stats = lower_tree(&mut tree, &LowerConfig::default())?;
//! assert_eq!(stats.literals, 1);
//! println!("{}", print_tree(&tree)?);
//! # Ok::<(), gopp_lowering::LowerError>(())
//! ```

pub mod ast;
pub mod batch;
pub mod config;
pub mod error;
pub mod passes;
pub mod printer;
pub mod visitor;

pub mod helpers;

pub use ast::{Decl, Expr, ImportTable, SourceFile, Stmt, SyntaxTree};
pub use batch::lower_batch;
pub use config::LowerConfig;
pub use error::{LowerError, LowerResult, MalformedReason};
pub use passes::{count_interpolations, lower_literal, lower_tree, LowerStats};
pub use printer::{print_expr, print_tree};
pub use visitor::MutVisitor;
