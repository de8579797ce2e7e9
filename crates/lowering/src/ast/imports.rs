//! Import table of a compilation unit.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Imports of a file, keyed by the local package name.
///
/// Entries keep insertion order so the printer emits a stable import block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportTable {
    entries: IndexMap<String, String>,
}

impl ImportTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` bound to `path`. An existing entry for `name` is kept and
    /// `false` is returned.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<String>) -> bool {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return false;
        }
        self.entries.insert(name, path.into());
        true
    }

    /// Make sure the package `name` is imported (under its own path).
    ///
    /// Returns `true` only when a new entry was appended.
    pub fn ensure(&mut self, name: &str) -> bool {
        let inserted = self.insert(name, name);
        if inserted {
            tracing::trace!(import = name, "registered import");
        }
        inserted
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn path(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(name, path)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, path)| (name.as_str(), path.as_str()))
    }
}

impl<N: Into<String>, P: Into<String>> FromIterator<(N, P)> for ImportTable {
    fn from_iter<I: IntoIterator<Item = (N, P)>>(iter: I) -> Self {
        let mut table = ImportTable::new();
        for (name, path) in iter {
            table.insert(name, path);
        }
        table
    }
}
