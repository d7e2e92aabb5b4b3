//! The single flat binding environment.
//!
//! One table per interpreter run; there are no nested scopes. Names are
//! case-sensitive.

use rustc_hash::FxHashMap;

use crate::{RuntimeError, Value};

/// Variable name to value mapping.
///
/// A name is present once declared; it holds a value once set. The two
/// steps are separate so a declared-but-unassigned name is representable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    symbols: FxHashMap<String, Option<Value>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: FxHashMap::default(),
        }
    }

    /// Make `name` present. Re-declaring keeps the current value.
    pub fn declare(&mut self, name: &str) {
        if !self.symbols.contains_key(name) {
            self.symbols.insert(name.to_string(), None);
        }
    }

    /// Assign a value to a declared name, replacing any previous value.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        match self.symbols.get_mut(name) {
            Some(slot) => {
                *slot = Some(value);
                Ok(())
            }
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Result<&Value, RuntimeError> {
        match self.symbols.get(name) {
            Some(Some(value)) => Ok(value),
            Some(None) => Err(RuntimeError::unassigned_variable(name)),
            None => Err(RuntimeError::undefined_variable(name)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Assigned bindings, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> = self
            .symbols
            .iter()
            .filter_map(|(name, value)| value.as_ref().map(|v| (name.as_str(), v)))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}
