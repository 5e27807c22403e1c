use thiserror::Error;

/// Represents all errors that can occur while tokenizing source text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that cannot start any token.
    #[error("Error on line {line}: Invalid token '{character}'.")]
    InvalidCharacter {
        /// The offending text.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A number with a dangling or repeated decimal point, such as `1.` or
    /// `1.2.3`.
    #[error("Error on line {line}: Malformed number '{lexeme}'.")]
    MalformedNumber {
        /// The offending lexeme.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A single token longer than the configured bound.
    #[error("Error on line {line}: Too long token '{lexeme}' (at most {max} characters).")]
    TokenTooLong {
        /// The offending lexeme.
        lexeme: String,
        /// The configured maximum.
        max:    usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A `"` with no matching `"` on the same line.
    #[error("Error on line {line}: Missing closing quote.")]
    UnterminatedString {
        /// The source line where the error occurred.
        line: usize,
    },
}
