use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to use a name that is bound in no enclosing scope.
    #[error("Error on line {line}: Undefined identifier '{name}'.")]
    UndefinedIdentifier {
        /// The name of the identifier.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator was applied to operands of the wrong type.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An `If` or `Loop` condition did not evaluate to a boolean.
    #[error("Error on line {line}: Expected boolean value, found {found}.")]
    ExpectedBoolean {
        /// The type name of the value found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Called something that is not a function.
    #[error("Error on line {line}: Value of type {found} is not callable.")]
    NotCallable {
        /// The type name of the value found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Indexed something that is not a table.
    #[error("Error on line {line}: Value of type {found} cannot be indexed.")]
    NotIndexable {
        /// The type name of the value found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Used `Null` as a table key.
    #[error("Error on line {line}: Table key must not be Null.")]
    NullKey {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used a table or a function as a table key.
    #[error("Error on line {line}: Value of type {found} cannot be used as a table key.")]
    UnhashableKey {
        /// The type name of the value found.
        found: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `Return` outside the top-level block of a function.
    #[error("Error on line {line}: Return outside of a function frame (no function frame).")]
    NoFunctionFrame {
        /// The source line where the error occurred.
        line: usize,
    },
    /// `=&` to a name that no enclosing scope binds.
    #[error("Error on line {line}: Referenced variable '{name}' is not identified.")]
    UnidentifiedReference {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Assignment to something other than an identifier or a table slot.
    #[error("Error on line {line}: Invalid assignment target.")]
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the configured bound.
    #[error("Error on line {line}: Maximum call depth of {max} exceeded.")]
    CallDepthExceeded {
        /// The configured maximum.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
}
