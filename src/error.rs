/// Lexing errors.
///
/// Raised while turning source text into tokens: characters that start no
/// token, malformed numbers, over-long lexemes and unterminated strings.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree,
/// including failures to resolve `Get` imports.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// type mismatches, unknown identifiers and misplaced `Return` statements.
pub mod runtime_error;
/// Arithmetic faults.
///
/// Division by zero is kept apart from the other runtime errors so hosts can
/// single it out.
pub mod divide_by_zero_error;

pub use divide_by_zero_error::DivideByZeroError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
use thiserror::Error as ThisError;

/// The four families of failure a script can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`LexError`].
    Lex,
    /// See [`ParseError`].
    Parse,
    /// See [`DivideByZeroError`].
    DivideByZero,
    /// See [`RuntimeError`].
    Runtime,
}

/// Any error raised while running a script.
///
/// Errors that originate inside an imported file are wrapped in
/// [`Error::Imported`], once per import level, so the message names the file
/// the failure came from. [`Error::kind`] looks through the wrappers.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The source could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The tokens do not form a valid program.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A division had a zero-valued divisor.
    #[error(transparent)]
    DivideByZero(#[from] DivideByZeroError),
    /// Evaluation failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
    /// An error that happened inside the named file.
    #[error("{source} (in file '{file}')")]
    Imported {
        /// The file the error came from.
        file:   String,
        /// The underlying error.
        source: Box<Error>,
    },
}

impl Error {
    /// Returns the kind of the underlying error, ignoring import wrappers.
    ///
    /// # Example
    /// ```
    /// use quill::error::{DivideByZeroError, Error, ErrorKind};
    ///
    /// let error = Error::from(DivideByZeroError { line: 3 }).in_file("lib.ql");
    /// assert_eq!(error.kind(), ErrorKind::DivideByZero);
    /// ```
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lex(_) => ErrorKind::Lex,
            Self::Parse(_) => ErrorKind::Parse,
            Self::DivideByZero(_) => ErrorKind::DivideByZero,
            Self::Runtime(_) => ErrorKind::Runtime,
            Self::Imported { source, .. } => source.kind(),
        }
    }

    /// Returns the innermost error, skipping every import wrapper.
    #[must_use]
    pub fn root(&self) -> &Self {
        let mut current = self;
        while let Self::Imported { source, .. } = current {
            current = source;
        }
        current
    }

    /// Annotates the error with the file it originated from.
    #[must_use]
    pub fn in_file(self, file: &str) -> Self {
        Self::Imported { file:   file.to_string(),
                         source: Box::new(self), }
    }
}
