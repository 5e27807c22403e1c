use crate::{
    ast::BinaryOperator,
    error::DivideByZeroError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a numeric arithmetic operation.
    ///
    /// Division by a zero-valued divisor (including `-0`) is reported as a
    /// [`DivideByZeroError`] rather than producing an infinity or `NaN`.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     ast::BinaryOperator,
    ///     error::{Error, ErrorKind},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Mul, 1.5, 2.0, 1).unwrap();
    /// assert_eq!(result, Value::from(3.0));
    ///
    /// let err = Context::eval_scalar_op(BinaryOperator::Div, 3.0, 0.0, 1).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivideByZero);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: f64,
                          right: f64,
                          line: usize)
                          -> EvalResult<Value> {
        let result = match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => {
                if right == 0.0 {
                    return Err(DivideByZeroError { line }.into());
                }
                left / right
            },
        };
        Ok(Value::Number(result))
    }
}
