use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
    loader::LoadError,
};

impl Parser<'_> {
    /// Parses a single statement, without its terminating `;`.
    ///
    /// A statement may be one of:
    /// - a block,
    /// - a `Get` import,
    /// - an `If` or `Loop`,
    /// - a `Return`,
    /// - an expression, optionally followed by `=` or `=&` and a value.
    ///
    /// Assignment targets are parsed as ordinary expressions; whether a
    /// target is assignable is decided during evaluation.
    ///
    /// # Returns
    /// A parsed [`Statement`] node.
    pub fn parse_statement(&mut self) -> ParseResult<Statement> {
        let line = self.tokens.line();
        match self.tokens.current() {
            Token::LBrace => Ok(Statement::Block(self.parse_block()?)),
            Token::Get => self.parse_import(),
            Token::If => self.parse_if(),
            Token::Loop => self.parse_loop(),
            Token::Return => {
                self.tokens.advance();
                let value = self.parse_expression()?;
                Ok(Statement::Return { value, line })
            },
            _ => {
                let expr = self.parse_expression()?;
                if self.tokens.eat(&Token::Equals) {
                    let value = self.parse_expression()?;
                    return Ok(Statement::Assign { target: expr,
                                                  value,
                                                  line });
                }
                if self.tokens.eat(&Token::RefAssign) {
                    let value = self.parse_expression()?;
                    return Ok(Statement::RefAssign { target: expr,
                                                     value,
                                                     line });
                }
                Ok(Statement::Expression { expr, line })
            },
        }
    }

    /// Parses `If (condition) { ... }` with an optional `Else { ... }`.
    fn parse_if(&mut self) -> ParseResult<Statement> {
        let (_, line) = self.tokens.advance();
        let condition = self.parse_condition()?;
        let then_block = self.parse_block()?;
        let else_block = if self.tokens.eat(&Token::Else) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Statement::If { condition,
                           then_block,
                           else_block,
                           line })
    }

    /// Parses `Loop (condition) { ... }`.
    fn parse_loop(&mut self) -> ParseResult<Statement> {
        let (_, line) = self.tokens.advance();
        let condition = self.parse_condition()?;
        let body = self.parse_block()?;

        Ok(Statement::Loop { condition, body, line })
    }

    /// Parses a parenthesized condition.
    fn parse_condition(&mut self) -> ParseResult<Expr> {
        self.expect_token(&Token::LParen, "'('")?;
        let condition = self.parse_expression()?;
        self.expect_token(&Token::RParen, "')'")?;
        Ok(condition)
    }

    /// Parses `Get "file"` and embeds the parsed contents of `file`.
    ///
    /// The file is fetched through the parser's loader, tokenized and parsed
    /// right away. Errors from inside the file are wrapped with its name.
    ///
    /// # Errors
    /// - `InvalidImportTarget` if `Get` is not followed by a quoted string.
    /// - `CyclicImport` if the file is already being imported.
    /// - `ImportNotFound` / `ImportUnreadable` if the loader fails.
    fn parse_import(&mut self) -> ParseResult<Statement> {
        let (_, line) = self.tokens.advance();
        let file = match self.tokens.advance() {
            (Token::QuotedString(file), _) => file,
            (other, _) => {
                return Err(ParseError::InvalidImportTarget { found: other.to_string(),
                                                             line }.into());
            },
        };

        if self.import_stack.contains(&file) {
            return Err(ParseError::CyclicImport { file, line }.into());
        }

        tracing::debug!(file = %file, line, "resolving import");
        let source = match self.loader.load_source(&file) {
            Ok(source) => source,
            Err(LoadError::NotFound) => {
                return Err(ParseError::ImportNotFound { file, line }.into());
            },
            Err(LoadError::Io(e)) => {
                return Err(ParseError::ImportUnreadable { file,
                                                          details: e.to_string(),
                                                          line }.into());
            },
        };
        let program = self.parse_nested(&source, &file).map_err(|e| e.in_file(&file))?;

        Ok(Statement::Import { file, program, line })
    }
}
