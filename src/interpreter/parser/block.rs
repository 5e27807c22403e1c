use crate::{
    ast::Block,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a block delimited by braces.
    ///
    /// Every statement inside the block must be terminated by `;`, exactly
    /// as at the top level.
    ///
    /// Grammar: `block := "{" (statement ";")* "}"`
    ///
    /// # Returns
    /// A [`Block`] carrying the line of its opening brace.
    ///
    /// # Errors
    /// - `Expected` if the opening brace or a `;` is missing.
    /// - `Expected` naming `'}'` if the input ends inside the block.
    /// - `NestingTooDeep` if blocks and expressions nest too deeply.
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        self.nested(|parser| {
                let line = parser.tokens.line();
                parser.expect_token(&Token::LBrace, "'{'")?;

                let mut statements = Vec::new();
                while !parser.tokens.eat(&Token::RBrace) {
                    if parser.tokens.is_at_end() {
                        return Err(ParseError::Expected { expected: "'}'".to_string(),
                                                          found:    parser.tokens
                                                                          .current()
                                                                          .to_string(),
                                                          line:     parser.tokens.line(), }.into());
                    }
                    statements.push(parser.parse_statement()?);
                    parser.expect_token(&Token::Semicolon, "';'")?;
                }

                Ok(Block { statements, line })
            })
    }
}
