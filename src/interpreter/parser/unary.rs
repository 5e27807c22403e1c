use std::rc::Rc;

use crate::{
    ast::{Expr, FunctionDef, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an optional sign followed by a postfix expression.
    ///
    /// Only one sign is accepted; `--x` is a syntax error.
    ///
    /// The rule is: `unary := ("+" | "-")? postfix`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.tokens.current() {
            Token::Plus => UnaryOperator::Plus,
            Token::Minus => UnaryOperator::Minus,
            _ => return self.parse_postfix(),
        };
        let (_, line) = self.tokens.advance();
        let expr = self.parse_postfix()?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(expr),
                           line })
    }

    /// Parses a primary expression followed by any number of calls and
    /// index operations, such as `f()()`, `t[0][1]` or `f()[0]`.
    ///
    /// The rule is: `postfix := primary ("(" args ")" | "[" expression "]")*`
    pub(in crate::interpreter::parser) fn parse_postfix(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.tokens.current() {
                Token::LParen => {
                    let (_, line) = self.tokens.advance();
                    let arguments =
                        self.parse_comma_separated(Self::parse_expression, &Token::RParen)?;
                    expr = Expr::Call { callee: Box::new(expr),
                                        arguments,
                                        line };
                },
                Token::LBracket => {
                    let (_, line) = self.tokens.advance();
                    let key = self.parse_expression()?;
                    self.expect_token(&Token::RBracket, "']'")?;
                    expr = Expr::Index { base: Box::new(expr),
                                         key: Box::new(key),
                                         line };
                },
                _ => return Ok(expr),
            }
        }
    }

    /// Parses a primary expression: literals, identifiers, function and
    /// table literals, and parenthesized expressions.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if the input ends where an expression is
    ///   required.
    /// - `UnexpectedToken` for any token that cannot start an expression.
    pub(in crate::interpreter::parser) fn parse_primary(&mut self) -> ParseResult<Expr> {
        let line = self.tokens.line();
        let value = match self.tokens.current() {
            Token::Number(n) => LiteralValue::Number(*n),
            Token::Bool(b) => LiteralValue::Bool(*b),
            Token::QuotedString(s) => LiteralValue::Str(s.clone()),
            Token::Identifier(name) => {
                let name = name.clone();
                self.tokens.advance();
                return Ok(Expr::Variable { name, line });
            },
            Token::Function => return self.parse_function_literal(),
            Token::LBracket => return self.parse_table_literal(),
            Token::LParen => {
                self.tokens.advance();
                let expr = self.parse_expression()?;
                self.expect_token(&Token::RParen, "')'")?;
                return Ok(expr);
            },
            Token::Eof => return Err(ParseError::UnexpectedEndOfInput { line }.into()),
            other => {
                return Err(ParseError::UnexpectedToken { token: other.to_string(),
                                                         line }.into());
            },
        };
        self.tokens.advance();

        Ok(Expr::Literal { value, line })
    }

    /// Parses a function literal.
    ///
    /// Grammar: `function := "Function" "(" (ident ("," ident)*)? ")" block`
    ///
    /// # Returns
    /// An `Expr::Literal` holding a [`LiteralValue::Function`].
    pub(in crate::interpreter::parser) fn parse_function_literal(&mut self) -> ParseResult<Expr> {
        let (_, line) = self.tokens.advance();
        self.expect_token(&Token::LParen, "'('")?;
        let params = self.parse_comma_separated(Self::parse_identifier, &Token::RParen)?;
        let body = self.parse_block()?;

        let def = FunctionDef { params,
                                body,
                                line,
                                file: self.current_file().map(str::to_string) };
        Ok(Expr::Literal { value: LiteralValue::Function(Rc::new(def)),
                           line })
    }

    /// Parses a table literal such as `[1: "a", "k": True]`. `[]` is the
    /// empty table.
    ///
    /// Grammar: `table := "[" (expression ":" expression ("," expression ":"
    /// expression)*)? "]"`
    pub(in crate::interpreter::parser) fn parse_table_literal(&mut self) -> ParseResult<Expr> {
        let (_, line) = self.tokens.advance();
        let entries = self.parse_comma_separated(|parser| {
                                                     let key = parser.parse_expression()?;
                                                     parser.expect_token(&Token::Colon, "':'")?;
                                                     let value = parser.parse_expression()?;
                                                     Ok((key, value))
                                                 },
                                                 &Token::RBracket)?;

        Ok(Expr::TableLiteral { entries, line })
    }
}
