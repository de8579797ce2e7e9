//! Lowering error types

use crate::ast::SourceFile;
use text_size::TextRange;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LowerError {
    #[error("malformed syntax tree: {reason}")]
    MalformedTree {
        span: TextRange,
        reason: MalformedReason,
    },

    #[error("interpolation literal was not lowered before printing")]
    UnloweredInterpolation { span: TextRange },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Structural invariant a malformed tree violates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("parser left a bad {0} node")]
    ParserErrorNode(&'static str),

    #[error("switch body contains a {0}, expected a case clause")]
    NotACaseClause(&'static str),

    #[error("select body contains a {0}, expected a comm clause")]
    NotACommClause(&'static str),

    #[error("type switch guard is a {0}, expected `x := y.(type)` or `y.(type)`")]
    InvalidTypeSwitchGuard(&'static str),
}

impl LowerError {
    pub fn malformed(span: TextRange, reason: MalformedReason) -> Self {
        LowerError::MalformedTree { span, reason }
    }

    /// Source range of the offending node, if the error has one.
    pub fn span(&self) -> Option<TextRange> {
        match self {
            LowerError::MalformedTree { span, .. } | LowerError::UnloweredInterpolation { span } => {
                Some(*span)
            }
            LowerError::InvalidConfig(_) => None,
        }
    }

    /// Render as `file:line:column: message` using the file's position table.
    pub fn located(&self, source: &SourceFile) -> String {
        match self.span() {
            Some(span) => format!("{}: {}", source.location(span), self),
            None => format!("{}: {}", source.name, self),
        }
    }
}

pub type LowerResult<T> = Result<T, LowerError>;
