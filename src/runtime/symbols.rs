//! Variable bindings for one execution.

use std::collections::BTreeMap;
use std::fmt;

use crate::runtime::error::RuntimeError;

/// Mapping from variable name to its last assigned value.
///
/// Reading an absent name is an error, never a default. Bindings iterate in
/// name order so two tables with the same contents display identically.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SymbolTable {
    values: BTreeMap<String, i32>,
}

impl SymbolTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Result<i32, RuntimeError> {
        self.values
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::uninitialized(name))
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn set(&mut self, name: impl Into<String>, value: i32) {
        self.values.insert(name.into(), value);
    }

    /// Returns `true` when `name` has been assigned.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

impl<N: Into<String>> FromIterator<(N, i32)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (N, i32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}

impl fmt::Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            writeln!(f, "{name}: {value}")?;
        }
        Ok(())
    }
}
