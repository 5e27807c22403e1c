use crate::{
    ast::{Expr, Program},
    config::Config,
    error::{Error, ParseError},
    interpreter::{
        lexer::{Token, tokenize},
        token_stream::TokenStream,
    },
    loader::SourceLoader,
};

pub type ParseResult<T> = Result<T, Error>;

/// Recursive-descent parser over a [`TokenStream`].
///
/// The parser resolves `Get` imports while parsing, through its
/// [`SourceLoader`], so the resulting [`Program`] is self-contained.
pub struct Parser<'a> {
    pub(super) tokens:       TokenStream,
    pub(super) loader:       &'a dyn SourceLoader,
    pub(super) config:       Config,
    /// Files currently being imported, outermost first.
    pub(super) import_stack: Vec<String>,
    depth:                   usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser for an already tokenized source.
    #[must_use]
    pub fn new(tokens: TokenStream, loader: &'a dyn SourceLoader, config: Config) -> Self {
        Self { tokens,
               loader,
               config,
               import_stack: Vec::new(),
               depth: 0 }
    }

    /// Marks `files` as being imported already, so importing any of them
    /// again is reported as a cycle.
    #[must_use]
    pub fn with_import_stack(mut self, files: Vec<String>) -> Self {
        self.import_stack = files;
        self
    }

    /// Parses a full program.
    ///
    /// Grammar: `program := (statement ";")* EOF`
    ///
    /// # Returns
    /// The parsed [`Program`].
    ///
    /// # Errors
    /// Returns the first syntax error, or any error raised while loading or
    /// parsing an imported file.
    pub fn parse_program(&mut self) -> ParseResult<Program> {
        let mut statements = Vec::new();

        while !self.tokens.is_at_end() {
            statements.push(self.parse_statement()?);
            self.expect_token(&Token::Semicolon, "';'")?;
        }

        Ok(Program { statements })
    }

    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, comparison, and recursively descends through
    /// the precedence hierarchy.
    ///
    /// Grammar: `expression := comparison`
    ///
    /// # Errors
    /// `NestingTooDeep` once expressions nest deeper than
    /// `Config::max_nesting_depth`, besides any syntax error.
    pub fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.nested(Self::parse_comparison)
    }

    /// Runs `parse` one nesting level deeper.
    pub(super) fn nested<T>(&mut self,
                            parse: impl FnOnce(&mut Self) -> ParseResult<T>)
                            -> ParseResult<T> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(ParseError::NestingTooDeep { max:  self.config.max_nesting_depth,
                                                    line: self.tokens.line(), }.into());
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// The file being parsed, when it came from the loader.
    pub(super) fn current_file(&self) -> Option<&str> {
        self.import_stack.last().map(String::as_str)
    }

    /// Parses the text of an imported file with the current import chain
    /// extended by `file`.
    pub(super) fn parse_nested(&self, source: &str, file: &str) -> ParseResult<Program> {
        let tokens = tokenize(source, self.config.max_lexeme_len)?;
        let mut stack = self.import_stack.clone();
        stack.push(file.to_string());

        Parser::new(tokens, self.loader, self.config).with_import_stack(stack)
                                                     .parse_program()
    }
}

/// Tokenizes and parses `source`.
///
/// `origin` names the file the source came from, if any, so that a script
/// importing itself is reported as a cyclic import.
///
/// # Errors
/// Returns a lexing or parsing error, possibly wrapped with the name of the
/// imported file it came from.
///
/// # Example
/// ```
/// use quill::{config::Config, interpreter::parser::core::parse_source, loader::MemoryLoader};
///
/// let loader = MemoryLoader::new();
/// let program = parse_source("a = 1 + 2; a;", &loader, Config::default(), None).unwrap();
/// assert_eq!(program.statements.len(), 2);
/// ```
pub fn parse_source(source: &str,
                    loader: &dyn SourceLoader,
                    config: Config,
                    origin: Option<&str>)
                    -> ParseResult<Program> {
    let tokens = tokenize(source, config.max_lexeme_len)?;
    tracing::debug!(tokens = tokens.remaining(), "parsing source");

    let stack = origin.map(|file| vec![file.to_string()]).unwrap_or_default();
    Parser::new(tokens, loader, config).with_import_stack(stack)
                                       .parse_program()
}
