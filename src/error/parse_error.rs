use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A specific token was required but another one was found.
    #[error("Error on line {line}: Expected {expected} but found {found}.")]
    Expected {
        /// What the parser was looking for, e.g. `';'`.
        expected: String,
        /// The token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    #[error("Error on line {line}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A comma directly followed by the closing delimiter of a list.
    #[error("Error on line {line}: Trailing comma is not allowed.")]
    TrailingComma {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two comparison operators in a row, such as `a < b < c`.
    #[error("Error on line {line}: Comparison operators cannot be chained.")]
    ChainedComparison {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Expressions or blocks nested deeper than the configured bound.
    #[error("Error on line {line}: Nesting deeper than {max} levels.")]
    NestingTooDeep {
        /// The configured maximum.
        max:  usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `Get` followed by something other than a quoted file name.
    #[error("Error on line {line}: Invalid script file name {found}.")]
    InvalidImportTarget {
        /// The token found after `Get`.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The imported file does not exist.
    #[error("Error on line {line}: Script file '{file}' is not in the current path.")]
    ImportNotFound {
        /// The requested file name.
        file: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The imported file exists but could not be read.
    #[error("Error on line {line}: Failed to read script file '{file}': {details}.")]
    ImportUnreadable {
        /// The requested file name.
        file:    String,
        /// Details from the loader.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A file that (directly or indirectly) imports itself.
    #[error("Error on line {line}: Cyclic import of '{file}'.")]
    CyclicImport {
        /// The file that closes the cycle.
        file: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The script passed to `run_file` could not be loaded.
    #[error("Error: Failed to load script '{file}': {details}.")]
    ScriptUnavailable {
        /// The requested file name.
        file:    String,
        /// Details from the loader.
        details: String,
    },
}
