use std::rc::Rc;

use crate::{
    ast::{FunctionDef, LiteralValue},
    error::RuntimeError,
    interpreter::value::table::Table,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, function returns, and conditional evaluations.
#[derive(Debug, Clone)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A string value, stored without quotes.
    Str(String),
    /// A boolean value (`True` or `False`).
    /// Produced by comparison operators and required by `If`/`Loop`
    /// conditions.
    Bool(bool),
    /// The absent value: unset return values and missing table entries.
    Null,
    /// A function value. Cloning shares the definition.
    Function(Rc<FunctionDef>),
    /// A shared mutable table.
    Table(Table),
}

impl PartialEq for Value {
    /// Scalars compare by value; functions and tables by identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Null, Self::Null) => true,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            (Self::Table(a), Self::Table(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Table> for Value {
    fn from(v: Table) -> Self {
        Self::Table(v)
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
            LiteralValue::Function(def) => Self::Function(Rc::clone(def)),
        }
    }
}

impl Value {
    /// The name of the value's type, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use quill::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from(1.0).type_name(), "Number");
    /// assert_eq!(Value::Null.type_name(), "Null");
    /// ```
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Str(_) => "Str",
            Self::Bool(_) => "Bool",
            Self::Null => "Null",
            Self::Function(_) => "Function",
            Self::Table(_) => "Table",
        }
    }

    /// Converts the value to `bool`, or returns an error if not boolean.
    ///
    /// Used for `If` and `Loop` conditions.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(RuntimeError::ExpectedBoolean)`: If not boolean.
    pub const fn as_bool(&self, line: usize) -> Result<bool, RuntimeError> {
        match self {
            Self::Bool(b) => Ok(*b),
            other => Err(RuntimeError::ExpectedBoolean { found: other.type_name(),
                                                         line }),
        }
    }

    /// Borrows the table behind the value, or fails with `NotIndexable`.
    pub const fn as_table(&self, line: usize) -> Result<&Table, RuntimeError> {
        match self {
            Self::Table(table) => Ok(table),
            other => Err(RuntimeError::NotIndexable { found: other.type_name(),
                                                      line }),
        }
    }

    /// Returns the function definition, or fails with `NotCallable`.
    pub fn as_function(&self, line: usize) -> Result<Rc<FunctionDef>, RuntimeError> {
        match self {
            Self::Function(def) => Ok(Rc::clone(def)),
            other => Err(RuntimeError::NotCallable { found: other.type_name(),
                                                     line }),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Null => write!(f, "Null"),
            Self::Function(def) => write!(f, "Function({})", def.params.join(", ")),
            Self::Table(table) => write!(f, "{table}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::ast::Block;

    #[test]
    fn display() {
        assert_eq!(Value::from(6.0).to_string(), "6");
        assert_eq!(Value::from(0.5).to_string(), "0.5");
        assert_eq!(Value::from("hi").to_string(), "hi");
        assert_eq!(Value::from(false).to_string(), "False");
        assert_eq!(Value::Null.to_string(), "Null");

        let def = FunctionDef { params: vec!["x".to_string(), "y".to_string()],
                                body:   Block { statements: Vec::new(),
                                                line:       1, },
                                line:   1,
                                file:   None, };
        assert_eq!(Value::Function(Rc::new(def)).to_string(), "Function(x, y)");
    }

    #[test]
    fn functions_compare_by_identity() {
        let def = Rc::new(FunctionDef { params: Vec::new(),
                                        body:   Block { statements: Vec::new(),
                                                        line:       1, },
                                        line:   1,
                                        file:   None, });
        let a = Value::Function(Rc::clone(&def));
        let b = Value::Function(def.clone());
        let c = Value::Function(Rc::new((*def).clone()));
        assert_eq!(a, b);
        assert!(a != c);
    }

    #[test]
    fn accessors_report_types() {
        assert_eq!(Value::from("x").as_bool(4),
                   Err(RuntimeError::ExpectedBoolean { found: "Str",
                                                       line:  4, }));
        assert!(matches!(Value::from(1.0).as_table(2),
                         Err(RuntimeError::NotIndexable { found: "Number", .. })));
    }
}
