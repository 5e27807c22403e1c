use crate::{
    ast::{Expr, Program},
    config::Config,
    error::{Error, RuntimeError},
    interpreter::{
        scope::{FrameKind, ScopeArena},
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`Error`] describing the failure. Evaluation raises runtime and
/// division-by-zero errors, possibly wrapped with the name of the imported
/// file they came from.
pub type EvalResult<T> = Result<T, Error>;

/// How a statement finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Continue with the next statement.
    Normal,
    /// A `Return` ran; the rest of the function body is skipped.
    Return,
}

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state: the scope chain with the root
/// bindings, the configured limits, the current call depth and the file
/// whose code is running.
///
/// ## Usage
///
/// `Context` is created once and reused for every program run by an
/// interpreter instance, so bindings made by one run are visible to the next.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// The scope chain. Only the root frame is live between runs.
    pub scopes:            ScopeArena,
    /// Limits applied during evaluation.
    pub config:            Config,
    pub(super) call_depth: usize,
    current_file:          Option<String>,
}

impl Context {
    /// Creates a new evaluation context with an empty root scope and default
    /// limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context with the given limits.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { config,
               ..Self::default() }
    }

    /// Executes every top-level statement of `program`, in order.
    ///
    /// Execution stops at the first error. Bindings made before the failure
    /// are kept.
    ///
    /// # Example
    /// ```
    /// use quill::{
    ///     config::Config,
    ///     interpreter::{evaluator::core::Context, parser::core::parse_source, value::core::Value},
    ///     loader::MemoryLoader,
    /// };
    ///
    /// let program = parse_source("a = 3; a = a + 3;", &MemoryLoader::new(), Config::default(), None)
    ///     .unwrap();
    /// let mut context = Context::new();
    /// context.execute(&program).unwrap();
    ///
    /// assert_eq!(context.scopes.root().get("a"), Some(&Value::Number(6.0)));
    /// ```
    pub fn execute(&mut self, program: &Program) -> EvalResult<()> {
        tracing::debug!(statements = program.statements.len(), "executing program");
        self.exec_statements(&program.statements)?;
        Ok(())
    }

    /// Executes `program` as the contents of `file`.
    ///
    /// Errors are annotated with `file`, as are errors from any function
    /// defined in another file and called from here.
    pub fn execute_file(&mut self, program: &Program, file: &str) -> EvalResult<()> {
        self.within_file(Some(file), |ctx| ctx.execute(program))
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// The evaluator dispatches based on expression variant: literals,
    /// variables, unary and binary operations, comparisons, calls, indexing
    /// and table literals.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    ///
    /// # Returns
    /// The value of the expression.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Variable { name, line } => self.eval_variable(name, *line),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, &value, *line)
            },
            Expr::BinaryOp { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right, *line)
            },
            Expr::Comparison { left, op, right, line } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_comparison(*op, &left, &right, *line)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line),
            Expr::Index { base, key, line } => self.eval_index(base, key, *line),
            Expr::TableLiteral { entries, line } => self.eval_table_literal(entries, *line),
        }
    }

    /// Resolves a variable through the scope chain.
    ///
    /// # Errors
    /// `RuntimeError::UndefinedIdentifier` if no frame binds `name`.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scopes
            .lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedIdentifier { name: name.to_string(),
                                                               line }.into())
    }

    /// Runs `body` inside a fresh frame of the given kind.
    ///
    /// The frame is popped whether `body` succeeds or fails.
    pub(super) fn with_scope<T>(&mut self,
                                kind: FrameKind,
                                body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                -> EvalResult<T> {
        self.scopes.push(kind);
        let result = body(self);
        self.scopes.pop();
        result
    }

    /// Runs `body` as code from `file`.
    ///
    /// When that differs from the file currently running, errors raised by
    /// `body` are annotated with `file`.
    pub(super) fn within_file<T>(&mut self,
                                 file: Option<&str>,
                                 body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                 -> EvalResult<T> {
        if self.current_file.as_deref() == file {
            return body(self);
        }

        let previous = std::mem::replace(&mut self.current_file, file.map(str::to_string));
        let result = body(self);
        self.current_file = previous;

        match file {
            Some(file) => result.map_err(|e| e.in_file(file)),
            None => result,
        }
    }
}
