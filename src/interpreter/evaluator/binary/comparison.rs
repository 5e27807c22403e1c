use crate::{
    ast::ComparisonOperator,
    interpreter::{
        evaluator::{
            binary::core::type_mismatch,
            core::{Context, EvalResult},
        },
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a comparison of the form `Number <Operator> Number`.
    ///
    /// Every comparison operator, equality included, requires two numbers;
    /// the result is a `Bool`.
    ///
    /// # Parameters
    /// - `op`: The comparison operator.
    /// - `left`: The left-hand value.
    /// - `right`: The right-hand value.
    /// - `line`: Current line number used for error reporting.
    ///
    /// # Returns
    /// `Value::Bool` with the outcome.
    #[allow(clippy::float_cmp)]
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           line: usize)
                           -> EvalResult<Value> {
        let (Value::Number(a), Value::Number(b)) = (left, right) else {
            return Err(type_mismatch(&op, left, right, line).into());
        };

        let outcome = match op {
            ComparisonOperator::Less => a < b,
            ComparisonOperator::Greater => a > b,
            ComparisonOperator::LessEqual => a <= b,
            ComparisonOperator::GreaterEqual => a >= b,
            ComparisonOperator::Equal => a == b,
            ComparisonOperator::NotEqual => a != b,
        };
        Ok(Value::Bool(outcome))
    }
}
