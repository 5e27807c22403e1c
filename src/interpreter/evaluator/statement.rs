use crate::{
    ast::{Block, Expr, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult, Flow},
        scope::FrameKind,
    },
};

impl Context {
    /// Executes statements in order in the current scope.
    ///
    /// Stops early, returning [`Flow::Return`], once a `Return` has run.
    pub fn exec_statements(&mut self, statements: &[Statement]) -> EvalResult<Flow> {
        for statement in statements {
            if self.exec_statement(statement)? == Flow::Return {
                return Ok(Flow::Return);
            }
        }
        Ok(Flow::Normal)
    }

    /// Executes a single statement.
    ///
    /// Assignments, imports and bare blocks work on the current scope. `If`
    /// and `Loop` each run in one child scope of their own.
    ///
    /// # Parameters
    /// - `statement`: Statement to execute.
    ///
    /// # Returns
    /// [`Flow::Return`] if a `Return` ran, [`Flow::Normal`] otherwise.
    pub fn exec_statement(&mut self, statement: &Statement) -> EvalResult<Flow> {
        match statement {
            Statement::Assign { target, value, line } => {
                self.exec_assign(target, value, *line, false)?;
                Ok(Flow::Normal)
            },
            Statement::RefAssign { target, value, line } => {
                self.exec_assign(target, value, *line, true)?;
                Ok(Flow::Normal)
            },
            Statement::Block(block) => self.exec_statements(&block.statements),
            Statement::Import { file, program, .. } => {
                tracing::debug!(file = %file, "running imported program");
                self.within_file(Some(file.as_str()), |ctx| {
                        ctx.exec_statements(&program.statements)
                    })
            },
            Statement::If { condition,
                            then_block,
                            else_block,
                            line, } => self.exec_if(condition, then_block, else_block.as_ref(), *line),
            Statement::Loop { condition, body, line } => self.exec_loop(condition, body, *line),
            Statement::Return { value, line } => {
                let value = self.eval(value)?;
                if !self.scopes.set_return_value(value) {
                    return Err(RuntimeError::NoFunctionFrame { line: *line }.into());
                }
                Ok(Flow::Return)
            },
            Statement::Expression { expr, .. } => {
                self.eval(expr)?;
                Ok(Flow::Normal)
            },
        }
    }

    /// Assigns to an identifier or a table slot.
    ///
    /// A plain assignment binds in the current scope. A reference assignment
    /// rewrites an existing binding in an enclosing scope, never the current
    /// one. Table slots are written directly either way.
    ///
    /// # Errors
    /// - `UnidentifiedReference` if no enclosing scope binds the name.
    /// - `InvalidAssignmentTarget` for any other kind of target.
    fn exec_assign(&mut self,
                   target: &Expr,
                   value: &Expr,
                   line: usize,
                   by_reference: bool)
                   -> EvalResult<()> {
        match target {
            Expr::Variable { name, .. } => {
                let value = self.eval(value)?;
                if by_reference {
                    if !self.scopes.assign_in_ancestor(name, value) {
                        return Err(RuntimeError::UnidentifiedReference { name: name.clone(),
                                                                         line }.into());
                    }
                } else {
                    self.scopes.define(name, value);
                }
                Ok(())
            },
            Expr::Index { base, key, line } => self.assign_index(base, key, value, *line),
            _ => Err(RuntimeError::InvalidAssignmentTarget { line }.into()),
        }
    }

    /// Runs an `If`: one child scope holds both the condition and the chosen
    /// branch.
    fn exec_if(&mut self,
               condition: &Expr,
               then_block: &Block,
               else_block: Option<&Block>,
               line: usize)
               -> EvalResult<Flow> {
        self.with_scope(FrameKind::Block, |ctx| {
                if ctx.eval(condition)?.as_bool(line)? {
                    ctx.exec_statements(&then_block.statements)
                } else if let Some(block) = else_block {
                    ctx.exec_statements(&block.statements)
                } else {
                    Ok(Flow::Normal)
                }
            })
    }

    /// Runs a `Loop`. A single child scope lives for the whole loop, so
    /// bindings made by the body persist across iterations and are visible
    /// to the condition.
    fn exec_loop(&mut self, condition: &Expr, body: &Block, line: usize) -> EvalResult<Flow> {
        self.with_scope(FrameKind::Block, |ctx| {
                while ctx.eval(condition)?.as_bool(line)? {
                    if ctx.exec_statements(&body.statements)? == Flow::Return {
                        return Ok(Flow::Return);
                    }
                }
                Ok(Flow::Normal)
            })
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

    fn run(source: &str) -> Result<Context, Error> {
        let program = parse_source(source, &MemoryLoader::new(), Config::default(), None)?;
        let mut context = Context::new();
        context.execute(&program)?;
        Ok(context)
    }

    fn global(context: &Context, name: &str) -> Option<Value> {
        context.scopes.root().get(name).cloned()
    }

    #[test]
    fn assign_shadows_inside_if() {
        let context = run("a = 1; If (True) { a = 2; b = a; };").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(1.0)));
        assert_eq!(global(&context, "b"), None);
    }

    #[test]
    fn ref_assign_writes_back() {
        let context = run("a = 1; If (True) { a =& 2; };").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(2.0)));
    }

    #[test]
    fn ref_assign_never_writes_current_scope() {
        let err = run("a = 1; a =& 2;").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::UnidentifiedReference { .. })));

        let err = run("If (True) { c = 1; c =& 2; };").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::UnidentifiedReference { .. })));
    }

    #[test]
    fn loop_scope_persists_across_iterations() {
        let context = run("i = 0; n = 0; Loop (i < 3) { i =& i + 1; seen = i; n =& seen; };")
            .unwrap();
        assert_eq!(global(&context, "i"), Some(Value::from(3.0)));
        assert_eq!(global(&context, "n"), Some(Value::from(3.0)));
        assert_eq!(global(&context, "seen"), None);
    }

    #[test]
    fn loop_condition_sees_body_bindings() {
        let context = run("r = 0; Loop (r < 2) { r =& r + 1; };").unwrap();
        assert_eq!(global(&context, "r"), Some(Value::from(2.0)));

        let context = run("count = 0; go = True; \
                           Loop (go) { count =& count + 1; If (count == 4) { go =& False; }; };")
            .unwrap();
        assert_eq!(global(&context, "count"), Some(Value::from(4.0)));
    }

    #[test]
    fn conditions_must_be_boolean() {
        let err = run("If (1) { };").unwrap_err();
        assert!(matches!(err,
                         Error::Runtime(RuntimeError::ExpectedBoolean { found: "Number", .. })));
        let err = run("Loop (\"x\") { };").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::ExpectedBoolean { found: "Str", .. })));
    }

    #[test]
    fn bare_blocks_share_the_current_scope() {
        let context = run("{ a = 3; a = a + 3; };").unwrap();
        assert_eq!(global(&context, "a"), Some(Value::from(6.0)));
    }

    #[test]
    fn return_outside_function() {
        let err = run("Return 1;").unwrap_err();
        assert_eq!(err.to_string(),
                   RuntimeError::NoFunctionFrame { line: 1 }.to_string());
    }

    #[test]
    fn invalid_assignment_target() {
        let err = run("1 = 2;").unwrap_err();
        assert!(matches!(err, Error::Runtime(RuntimeError::InvalidAssignmentTarget { line: 1 })));
    }

    #[test]
    fn partial_effects_are_kept() {
        let program =
            parse_source("a = 1; b = missing; c = 3;", &MemoryLoader::new(), Config::default(), None)
                .unwrap();
        let mut context = Context::new();
        assert!(context.execute(&program).is_err());
        assert_eq!(global(&context, "a"), Some(Value::from(1.0)));
        assert_eq!(global(&context, "c"), None);
        assert_eq!(context.scopes.depth(), 1);
    }
}
