//! Abstract Syntax Tree (AST) definition for extended Go source.

pub mod expr;
pub mod imports;
pub mod nodes;
pub mod ops;
pub mod source;

// Re-export commonly used types
pub use expr::*;
pub use imports::ImportTable;
pub use nodes::*;
pub use ops::{AssignOp, BinaryOp, BranchKind, ChanDir, DeclKeyword, IncDecOp, UnaryOp};
pub use source::{Position, SourceFile};
