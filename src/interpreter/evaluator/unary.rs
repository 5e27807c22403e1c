use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Plus`: returns the number unchanged.
    /// - `Minus`: numeric negation.
    ///
    /// Both require a number.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Minus, &Value::from(5.0), 1).unwrap();
    /// assert_eq!(v, Value::from(-5.0));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Plus, &Value::from(true), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        let Value::Number(n) = value else {
            let details = format!("cannot apply unary '{op}' to {}", value.type_name());
            return Err(RuntimeError::TypeMismatch { details, line }.into());
        };
        match op {
            UnaryOperator::Plus => Ok(Value::Number(*n)),
            UnaryOperator::Minus => Ok(Value::Number(-n)),
        }
    }
}
