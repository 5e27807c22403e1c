//! # quill
//!
//! quill is a small embeddable scripting language written in Rust.
//! It tokenizes, parses and evaluates scripts with first-class functions,
//! shared mutable tables, `Get` imports and explicit value-versus-reference
//! assignment (`=` versus `=&`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Program,
    config::Config,
    error::{Error, ParseError},
    interpreter::{evaluator::core::Context, parser::core::parse_source, value::core::Value},
    loader::{FsLoader, SourceLoader},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of source code as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Interpreter limits.
///
/// Holds the tunable bounds on token length and call depth.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a script.
/// Every error carries the line it was raised on; errors raised inside an
/// imported file are additionally annotated with that file's name.
///
/// # Responsibilities
/// - Defines one error enum per failure family (lex, parse, division by zero,
///   runtime).
/// - Aggregates them into [`error::Error`] with [`error::ErrorKind`].
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the scope chain.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, token stream, parser, evaluator,
///   scopes and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Script sources.
///
/// Defines how script text is obtained by name, for `Get` imports and for
/// [`Interpreter::run_file`].
pub mod loader;

/// An interpreter instance: a root scope plus the loader used for imports.
///
/// Bindings persist across calls to [`Interpreter::run`], so a host can feed
/// a script in pieces or inspect results afterwards.
pub struct Interpreter {
    context: Context,
    loader:  Box<dyn SourceLoader>,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter with default limits that resolves imports
    /// against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an interpreter with the given limits.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { context: Context::with_config(config),
               loader:  Box::new(FsLoader::default()), }
    }

    /// Replaces the loader used for `Get` imports and [`Self::run_file`].
    #[must_use]
    pub fn with_loader(mut self, loader: impl SourceLoader + 'static) -> Self {
        self.loader = Box::new(loader);
        self
    }

    /// Parses `source` without running it. Imports are resolved.
    pub fn parse(&self, source: &str) -> Result<Program, Error> {
        parse_source(source, self.loader.as_ref(), self.context.config, None)
    }

    /// Lexes, parses and runs `source` against the root scope.
    ///
    /// Nothing runs if the source does not parse. Once execution starts,
    /// effects made before an error are kept.
    ///
    /// # Examples
    /// ```
    /// use quill::{Interpreter, interpreter::value::core::Value};
    ///
    /// let mut interpreter = Interpreter::new();
    /// interpreter.run("a = 3; a = a + 3;").unwrap();
    /// assert_eq!(interpreter.get("a"), Some(&Value::Number(6.0)));
    ///
    /// // Bindings survive between runs.
    /// interpreter.run("b = a * 2;").unwrap();
    /// assert_eq!(interpreter.get("b"), Some(&Value::Number(12.0)));
    ///
    /// assert!(interpreter.run("c = missing;").is_err());
    /// ```
    pub fn run(&mut self, source: &str) -> Result<(), Error> {
        let program = self.parse(source)?;
        self.context.execute(&program)?;
        tracing::debug!(bindings = self.context.scopes.root().len(), "run finished");
        Ok(())
    }

    /// Loads `name` through the loader and runs it.
    ///
    /// Any error is annotated with `name`.
    pub fn run_file(&mut self, name: &str) -> Result<(), Error> {
        tracing::debug!(file = name, "running script file");
        let source = self.loader.load_source(name).map_err(|e| {
            ParseError::ScriptUnavailable { file:    name.to_string(),
                                            details: e.to_string(), }
        })?;
        let program = parse_source(&source, self.loader.as_ref(), self.context.config, Some(name))
            .map_err(|e| e.in_file(name))?;
        self.context.execute_file(&program, name)
    }

    /// Looks up a binding in the root scope.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.context.scopes.root().get(name)
    }

    /// The root bindings, sorted by name.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut bindings: Vec<_> = self.context
                                       .scopes
                                       .root()
                                       .iter()
                                       .map(|(name, value)| (name.as_str(), value))
                                       .collect();
        bindings.sort_by_key(|(name, _)| *name);
        bindings.into_iter()
    }
}

impl std::fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interpreter")
         .field("context", &self.context)
         .finish_non_exhaustive()
    }
}

/// Runs `source` in a fresh interpreter and returns it for inspection.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails.
///
/// # Examples
/// ```
/// use quill::{error::ErrorKind, interpreter::value::core::Value, run};
///
/// let interpreter = run("b = Function(x, y) { Return x + y; }; a = b(4, 1 + 3);").unwrap();
/// assert_eq!(interpreter.get("a"), Some(&Value::Number(8.0)));
///
/// let err = run("3 / 0;").err().unwrap();
/// assert_eq!(err.kind(), ErrorKind::DivideByZero);
/// ```
pub fn run(source: &str) -> Result<Interpreter, Error> {
    let mut interpreter = Interpreter::new();
    interpreter.run(source)?;
    Ok(interpreter)
}
