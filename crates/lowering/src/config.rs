//! Lowering configuration.

use crate::error::{LowerError, LowerResult};
use serde::{Deserialize, Serialize};

/// Target of the generated formatting call.
///
/// Defaults lower to `fmt.Sprintf("...%v...", args)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LowerConfig {
    /// Package providing the formatting function; also the import added.
    pub format_package: String,
    /// Function called on `format_package`.
    pub format_function: String,
    /// Verb used for embedded expressions without a directive.
    pub default_verb: String,
}

impl LowerConfig {
    /// Create a configuration targeting `fmt.Sprintf`.
    pub fn new() -> Self {
        LowerConfig {
            format_package: "fmt".to_string(),
            format_function: "Sprintf".to_string(),
            default_verb: "v".to_string(),
        }
    }

    /// Check that the package and function names are Go identifiers and the
    /// default verb is non-empty.
    pub fn validate(&self) -> LowerResult<()> {
        if !is_go_identifier(&self.format_package) {
            return Err(LowerError::InvalidConfig(format!(
                "format_package `{}` is not an identifier",
                self.format_package
            )));
        }
        if !is_go_identifier(&self.format_function) {
            return Err(LowerError::InvalidConfig(format!(
                "format_function `{}` is not an identifier",
                self.format_function
            )));
        }
        if self.default_verb.is_empty() {
            return Err(LowerError::InvalidConfig(
                "default_verb must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LowerConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}
