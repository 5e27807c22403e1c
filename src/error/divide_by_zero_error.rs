use thiserror::Error;

/// Raised when the right operand of `/` is numerically zero.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error on line {line}: Division by zero.")]
pub struct DivideByZeroError {
    /// The source line where the error occurred.
    pub line: usize,
}
