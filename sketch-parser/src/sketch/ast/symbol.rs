//! Symbol table
//!
//! Maps declared identifiers to command indices. Identifiers are unique
//! within a program; a duplicate declaration is rejected at parse time so
//! the mapping stays unambiguous. Declaration order is preserved for
//! display and debugging.

use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize)]
pub struct SymbolTable {
    /// Declaration order, as (identifier, command index) pairs.
    entries: Vec<(String, usize)>,
    /// Lookup index over `entries`.
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Declare `name` as defined by the command at `command`. Returns the
    /// command index of the previous declaration if `name` is already taken,
    /// in which case the table is unchanged (first declaration wins).
    pub fn declare(&mut self, name: &str, command: usize) -> Result<(), usize> {
        if let Some(&existing) = self.by_name.get(name) {
            return Err(existing);
        }
        self.entries.push((name.to_string(), command));
        self.by_name.insert(name.to_string(), command);
        Ok(())
    }

    /// Look up the command index defining `name`.
    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(name, idx)| (name.as_str(), *idx))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_and_lookup() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("A", 0), Ok(()));
        assert_eq!(table.declare("B", 1), Ok(()));
        assert_eq!(table.lookup("A"), Some(0));
        assert_eq!(table.lookup("B"), Some(1));
        assert_eq!(table.lookup("C"), None);
    }

    #[test]
    fn test_duplicate_is_rejected_first_wins() {
        let mut table = SymbolTable::new();
        assert_eq!(table.declare("A", 0), Ok(()));
        assert_eq!(table.declare("A", 3), Err(0));
        assert_eq!(table.lookup("A"), Some(0));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_declaration_order_preserved() {
        let mut table = SymbolTable::new();
        table.declare("Z", 0).unwrap();
        table.declare("A", 1).unwrap();
        table.declare("M", 2).unwrap();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }
}
