//! Visitor pattern for in-place AST traversal and rewriting.

pub mod mut_visit;
pub mod mut_walk;
pub mod transform;

pub use mut_visit::MutVisitor;
