use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        scope::FrameKind,
        value::core::Value,
    },
};

impl Context {
    /// Calls a user-defined function.
    ///
    /// A new function frame is opened as a child of the caller's current
    /// scope, not of the scope the function was defined in, so free names
    /// in the body resolve at the call site. The callee and the arguments
    /// are evaluated inside that frame. Arguments are bound to parameters
    /// pairwise: extra arguments are dropped and missing ones stay unbound.
    /// Errors raised by a body written in another file name that file.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// The value set by `Return`, or `Null`.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `CallDepthExceeded` if too many calls are active.
    /// - Any error raised by the arguments or the body.
    #[tracing::instrument(level = "trace", skip(self, callee, arguments))]
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize)
                     -> EvalResult<Value> {
        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::CallDepthExceeded { max: self.config.max_call_depth,
                                                         line }.into());
        }

        self.call_depth += 1;
        let result =
            self.with_scope(FrameKind::Function { return_value: Value::Null }, |ctx| {
                    let function = ctx.eval(callee)?.as_function(line)?;
                    let values = arguments.iter()
                                          .map(|argument| ctx.eval(argument))
                                          .collect::<EvalResult<Vec<_>>>()?;

                    for (param, value) in function.params.iter().zip(values) {
                        ctx.scopes.define(param, value);
                    }

                    ctx.within_file(function.file.as_deref(), |ctx| {
                           ctx.exec_statements(&function.body.statements)
                       })?;
                    Ok(ctx.scopes.return_value().cloned().unwrap_or(Value::Null))
                });
        self.call_depth -= 1;

        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{
        config::Config,
        error::{Error, RuntimeError},
        interpreter::{evaluator::core::Context, parser::core::parse_source, value::core::Value},
        loader::MemoryLoader,
    };

    fn run_with(source: &str, config: Config) -> Result<Context, Error> {
        let program = parse_source(source, &MemoryLoader::new(), config, None)?;
        let mut context = Context::with_config(config);
        context.execute(&program)?;
        Ok(context)
    }

    fn run(source: &str) -> Result<Context, Error> {
        run_with(source, Config::default())
    }

    fn global(context: &Context, name: &str) -> Option<Value> {
        context.scopes.root().get(name).cloned()
    }

    #[test]
    fn returns_value() {
        let context = run("b = Function(x, y) { Return x + y; }; a = b(4, 1 + 3);").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(8.0)));
    }

    #[test]
    fn missing_return_is_null() {
        let context = run("f = Function() { x = 1; }; a = f();").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::Null));
    }

    #[test]
    fn return_stops_the_body() {
        let context = run("hit = 0; f = Function() { Return 1; hit =& 1; }; a = f();").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(1.0)));
        assert_eq!(global(&context, "hit"), Some(Value::from(0.0)));
    }

    #[test]
    fn return_inside_nested_block_has_no_frame() {
        let err = run("f = Function(x) { If (x > 0) { Return 1; }; }; f(1);").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::NoFunctionFrame { line: 1 })));
    }

    #[test]
    fn arguments_bind_pairwise() {
        let context = run("f = Function(x, y) { Return x; }; a = f(1); b = f(1, 2, 3);").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(1.0)));
        assert_eq!(global(&context, "b"), Some(Value::from(1.0)));

        let err = run("f = Function(x, y) { Return y; }; f(1);").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::UndefinedIdentifier { .. })));
    }

    #[test]
    fn free_names_resolve_at_the_call_site() {
        let source = "f = Function() { Return v; }; \
                      g = Function() { v = 2; Return f(); }; \
                      a = g();";
        let context = run(source).unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(2.0)));
    }

    #[test]
    fn callers_can_be_updated_by_reference() {
        let context = run("n = 0; bump = Function() { n =& n + 1; }; bump(); bump();").unwrap();
        assert_eq!(global(&context, "n"), Some(Value::from(2.0)));
    }

    #[test]
    fn chained_calls() {
        let context =
            run("make = Function() { Return Function(x) { Return x * 2; }; }; a = make()(5);")
                .unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(10.0)));
    }

    #[test]
    fn recursion() {
        let source = "fact = Function(n) { r = 1; If (n > 1) { r =& n * fact(n - 1); }; Return r; }; \
                      a = fact(5);";
        let context = run(source).unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(120.0)));
    }

    #[test]
    fn not_callable() {
        let err = run("a = 1; a();").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::NotCallable { found: "Number", .. })));
    }

    #[test]
    fn call_depth_is_bounded() {
        let config = Config { max_call_depth: 10,
                              ..Config::default() };
        let err = run_with("f = Function() { Return f(); }; f();", config).unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::CallDepthExceeded { max: 10, .. })));
    }

    #[test]
    fn frames_are_popped_after_errors() {
        let program = parse_source("f = Function() { Return 1 / 0; }; f();",
                                   &MemoryLoader::new(),
                                   Config::default(),
                                   None).unwrap();
        let mut context = Context::new();
        assert!(context.execute(&program).is_err());
        assert_eq!(context.scopes.depth(), 1);
    }

    #[test]
    fn return_inside_loop_has_no_frame() {
        let err = run("f = Function() { Loop (True) { Return 1; }; }; f();").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::NoFunctionFrame { line: 1 })));
    }

    #[test]
    fn default_call_depth_fits_a_small_thread() {
        let max = Config::default().max_call_depth;
        let count = "f = Function(n) { r = 0; If (n > 0) { r =& f(n - 1) + 1; }; Return r; };";

        let (deepest, beyond) =
            std::thread::Builder::new().stack_size(2 * 1024 * 1024)
                                       .spawn(move || {
                                           let deepest =
                                               run(&format!("{count} a = f({});", max - 1))
                                                   .map(|context| {
                                                       global(&context, "a").map(|a| a.to_string())
                                                   });
                                           let beyond =
                                               run(&format!("{count} a = f({max});")).map(|_| ());
                                           (deepest, beyond)
                                       })
                                       .unwrap()
                                       .join()
                                       .unwrap();

        assert_eq!(deepest.unwrap(), Some((max - 1).to_string()));
        assert!(matches!(beyond, Err(Error::Runtime(RuntimeError::CallDepthExceeded { .. }))));
    }

    #[test]
    fn errors_in_imported_functions_name_their_file() {
        let loader =
            MemoryLoader::new().with_file("lib.ql", "x = 1;\n\nd = Function(v) { Return v / 0; };");
        let program =
            parse_source("Get \"lib.ql\"; a = d(1);", &loader, Config::default(), None).unwrap();
        let err = Context::new().execute(&program).unwrap_err();

        assert!(matches!(&err, Error::Imported { file, .. } if file == "lib.ql"));
        assert_eq!(err.to_string(), "Error on line 3: Division by zero. (in file 'lib.ql')");
    }
}
