use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary arithmetic operation between two values.
    ///
    /// `+` adds two numbers or concatenates two strings. `-`, `*` and `/`
    /// only accept numbers and are routed to `eval_scalar_op`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::from(3.0), &Value::from(4.0), 1);
    /// assert_eq!(sum.unwrap(), Value::from(7.0));
    ///
    /// let joined = Context::eval_binary(BinaryOperator::Add, &Value::from("ab"), &Value::from("c"), 1);
    /// assert_eq!(joined.unwrap(), Value::from("abc"));
    ///
    /// assert!(Context::eval_binary(BinaryOperator::Add, &Value::from("test"), &Value::from(1.0), 1)
    ///     .is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (op, left, right) {
            (BinaryOperator::Add, Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            (_, Value::Number(a), Value::Number(b)) => Self::eval_scalar_op(op, *a, *b, line),
            _ => Err(type_mismatch(&op, left, right, line).into()),
        }
    }
}

/// Builds the error for an operator applied to unsupported operand types.
pub(in crate::interpreter::evaluator) fn type_mismatch(op: &dyn std::fmt::Display,
                                                       left: &Value,
                                                       right: &Value,
                                                       line: usize)
                                                       -> RuntimeError {
    RuntimeError::TypeMismatch { details: format!("cannot apply '{op}' to {} and {}",
                                                  left.type_name(),
                                                  right.type_name()),
                                 line }
}
