//! Per-file position table.
//!
//! Spans are byte offsets into the source. The parser records where each
//! line starts so diagnostics can be reported as `file:line:column` without
//! keeping the source text around.

use serde::{Deserialize, Serialize};
use std::fmt;
use text_size::{TextRange, TextSize};

/// File name and line-start offsets of one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    line_starts: Vec<TextSize>,
}

impl SourceFile {
    /// Build the position table for `text`.
    pub fn new(name: impl Into<String>, text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(idx, _)| TextSize::from(idx as u32 + 1)),
        );
        SourceFile {
            name: name.into(),
            line_starts,
        }
    }

    /// A file with no recorded text; every offset resolves to line 1.
    pub fn unnamed() -> Self {
        SourceFile {
            name: "<input>".to_string(),
            line_starts: vec![TextSize::from(0)],
        }
    }

    /// 1-based line and column of `offset`.
    pub fn position(&self, offset: TextSize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next.saturating_sub(1),
        };
        let line_start = self.line_starts.get(line).copied().unwrap_or_default();
        Position {
            line: line as u32 + 1,
            column: u32::from(offset - line_start) + 1,
        }
    }

    /// `file:line:column` of the start of `span`.
    pub fn location(&self, span: TextRange) -> String {
        format!("{}:{}", self.name, self.position(span.start()))
    }
}

impl Default for SourceFile {
    fn default() -> Self {
        Self::unnamed()
    }
}

/// A resolved source position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_first_line() {
        let file = SourceFile::new("main.gpp", "package main\n");
        assert_eq!(
            file.position(TextSize::from(8)),
            Position { line: 1, column: 9 }
        );
    }

    #[test]
    fn test_position_after_newlines() {
        let file = SourceFile::new("main.gpp", "package main\n\nfunc main() {\n}\n");
        // `func` starts line 3
        assert_eq!(
            file.position(TextSize::from(14)),
            Position { line: 3, column: 1 }
        );
        assert_eq!(
            file.position(TextSize::from(19)),
            Position { line: 3, column: 6 }
        );
    }

    #[test]
    fn test_location_format() {
        let file = SourceFile::new("a.gpp", "x\ny");
        let span = TextRange::new(TextSize::from(2), TextSize::from(3));
        assert_eq!(file.location(span), "a.gpp:2:1");
    }

    #[test]
    fn test_unnamed_file_resolves_to_first_line() {
        let file = SourceFile::unnamed();
        assert_eq!(
            file.position(TextSize::from(40)),
            Position {
                line: 1,
                column: 41
            }
        );
    }
}
