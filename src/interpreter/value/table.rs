use std::{cell::RefCell, collections::HashMap, rc::Rc};

use ordered_float::OrderedFloat;

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// The hashable projection of a value used as a table key.
///
/// Numbers are wrapped in [`OrderedFloat`] so they can be hashed and sorted.
/// Ordering is only used to print tables deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TableKey {
    /// A boolean key.
    Bool(bool),
    /// A numeric key.
    Number(OrderedFloat<f64>),
    /// A string key.
    Str(String),
}

impl TableKey {
    /// Projects a runtime value onto a key.
    ///
    /// # Errors
    /// - `RuntimeError::NullKey` for `Null`.
    /// - `RuntimeError::UnhashableKey` for functions and tables.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::{core::Value, table::TableKey};
    ///
    /// assert!(TableKey::from_value(&Value::from(3.0), 1).is_ok());
    /// assert!(TableKey::from_value(&Value::Null, 1).is_err());
    /// ```
    pub fn from_value(value: &Value, line: usize) -> Result<Self, RuntimeError> {
        match value {
            Value::Number(n) => Ok(Self::Number(OrderedFloat(*n))),
            Value::Str(s) => Ok(Self::Str(s.clone())),
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Null => Err(RuntimeError::NullKey { line }),
            Value::Function(_) | Value::Table(_) => {
                Err(RuntimeError::UnhashableKey { found: value.type_name(),
                                                  line })
            },
        }
    }
}

impl std::fmt::Display for TableKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Number(n) => write!(f, "{}", n.into_inner()),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A shared, mutable associative table.
///
/// Cloning a `Table` clones the handle, not the entries.
#[derive(Clone, Default)]
pub struct Table(Rc<RefCell<HashMap<TableKey, Value>>>);

impl Table {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value stored under `key`, or `Null` when absent.
    #[must_use]
    pub fn get(&self, key: &TableKey) -> Value {
        self.0.borrow().get(key).cloned().unwrap_or(Value::Null)
    }

    /// Stores `value` under `key`, replacing any previous entry.
    pub fn insert(&self, key: TableKey, value: Value) {
        self.0.borrow_mut().insert(key, value);
    }

    /// Whether both handles refer to the same storage.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// A snapshot of the entries, sorted by key.
    #[must_use]
    pub fn entries(&self) -> Vec<(TableKey, Value)> {
        let mut entries: Vec<_> =
            self.0.borrow().iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    fn write_nested(&self,
                    f: &mut std::fmt::Formatter<'_>,
                    ancestors: &mut Vec<Self>)
                    -> std::fmt::Result {
        if ancestors.iter().any(|t| t.ptr_eq(self)) {
            return write!(f, "[...]");
        }
        ancestors.push(self.clone());
        write!(f, "[")?;
        for (i, (key, value)) in self.entries().into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: ")?;
            match value {
                Value::Table(inner) => inner.write_nested(f, ancestors)?,
                other => write!(f, "{other}")?,
            }
        }
        ancestors.pop();
        write!(f, "]")
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_nested(f, &mut Vec::new())
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Table({self})")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_keys_are_null() {
        let table = Table::new();
        assert_eq!(table.get(&TableKey::Str("k".to_string())), Value::Null);
    }

    #[test]
    fn clones_alias_storage() {
        let table = Table::new();
        let alias = table.clone();
        alias.insert(TableKey::Number(OrderedFloat(1.0)), Value::from(true));
        assert_eq!(table.get(&TableKey::Number(OrderedFloat(1.0))), Value::from(true));
        assert!(table.ptr_eq(&alias));
        assert!(!table.ptr_eq(&Table::new()));
    }

    #[test]
    fn display_is_sorted() {
        let table = Table::new();
        table.insert(TableKey::Str("k".to_string()), Value::from(true));
        table.insert(TableKey::Number(OrderedFloat(3.0)), Value::from(4.0));
        table.insert(TableKey::Number(OrderedFloat(-1.0)), Value::from("neg"));
        assert_eq!(table.to_string(), "[-1: neg, 3: 4, k: True]");
    }

    #[test]
    fn self_reference_is_guarded() {
        let table = Table::new();
        table.insert(TableKey::Bool(true), Value::Table(table.clone()));
        assert_eq!(table.to_string(), "[True: [...]]");
    }

    #[test]
    fn unhashable_keys() {
        assert_eq!(TableKey::from_value(&Value::Table(Table::new()), 7),
                   Err(RuntimeError::UnhashableKey { found: "Table",
                                                     line:  7, }));
        assert_eq!(TableKey::from_value(&Value::Null, 2), Err(RuntimeError::NullKey { line: 2 }));
    }
}
