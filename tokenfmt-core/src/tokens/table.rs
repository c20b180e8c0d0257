//! Ordered name→value tables shared by the pipeline stages.

use serde::Serialize;
use std::collections::HashMap;

/// Ordered mapping from variable name to raw value.
///
/// Re-inserting an existing name overwrites the stored value without moving
/// the entry, so iteration order reflects first appearance while the value
/// reflects the last declaration (last declaration wins, no error).
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariableTable {
    entries: Vec<(String, String)>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl VariableTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a declaration, overwriting any earlier value for the name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, value));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&at| self.entries[at].1.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The three output tables produced by the rule engine.
///
/// Invariant: a variable name appears in at most one of the three tables.
/// Mode-suffixed variables go to `light_mode`/`dark_mode`; everything else
/// that survives the rules goes to `primitives`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProcessedResult {
    pub primitives: VariableTable,
    pub light_mode: VariableTable,
    pub dark_mode: VariableTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_preserves_first_position_on_overwrite() {
        let mut table = VariableTable::new();
        table.insert("a", "1");
        table.insert("b", "2");
        table.insert("a", "3");

        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("a", "3"), ("b", "2")]);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn get_returns_latest_value() {
        let mut table = VariableTable::new();
        table.insert("spacing-4", "16px");
        table.insert("spacing-4", "1rem");

        assert_eq!(table.get("spacing-4"), Some("1rem"));
        assert!(table.contains("spacing-4"));
        assert!(!table.contains("spacing-8"));
    }

    #[test]
    fn empty_table() {
        let table = VariableTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), None);
    }
}
