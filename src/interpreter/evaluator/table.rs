use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            core::Value,
            table::{Table, TableKey},
        },
    },
};

impl Context {
    /// Builds a new table from `[key: value, ...]` entries, evaluated left
    /// to right. Later duplicates overwrite earlier ones.
    ///
    /// # Errors
    /// `NullKey` or `UnhashableKey` for keys that cannot index a table.
    pub fn eval_table_literal(&mut self,
                              entries: &[(Expr, Expr)],
                              line: usize)
                              -> EvalResult<Value> {
        let table = Table::new();
        for (key, value) in entries {
            let key = TableKey::from_value(&self.eval(key)?, line)?;
            let value = self.eval(value)?;
            table.insert(key, value);
        }
        Ok(Value::Table(table))
    }

    /// Reads `base[key]`. An absent key yields `Null`.
    ///
    /// # Errors
    /// - `NotIndexable` if `base` is not a table.
    /// - `NullKey` or `UnhashableKey` for invalid keys.
    pub fn eval_index(&mut self, base: &Expr, key: &Expr, line: usize) -> EvalResult<Value> {
        let base = self.eval(base)?;
        let table = base.as_table(line)?;
        let key = TableKey::from_value(&self.eval(key)?, line)?;
        Ok(table.get(&key))
    }

    /// Writes `base[key] = value` into the table's shared storage.
    ///
    /// No scope is searched or modified; every alias of the table sees the
    /// new entry.
    pub(super) fn assign_index(&mut self,
                               base: &Expr,
                               key: &Expr,
                               value: &Expr,
                               line: usize)
                               -> EvalResult<()> {
        let table = self.eval(base)?.as_table(line)?.clone();
        let key = TableKey::from_value(&self.eval(key)?, line)?;
        let value = self.eval(value)?;
        table.insert(key, value);
        Ok(())
    }
}
