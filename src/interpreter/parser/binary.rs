use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an optional single comparison.
    ///
    /// Comparisons do not chain: `a < b < c` is rejected rather than being
    /// read as `(a < b) < c`.
    ///
    /// The rule is: `comparison := additive (cmp_op additive)?`
    ///
    /// # Errors
    /// `ParseError::ChainedComparison` if a second comparison operator
    /// follows.
    pub(in crate::interpreter::parser) fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let left = self.parse_additive()?;

        let Some(op) = token_to_comparison_operator(self.tokens.current()) else {
            return Ok(left);
        };
        let (_, line) = self.tokens.advance();
        let right = self.parse_additive()?;

        if token_to_comparison_operator(self.tokens.current()).is_some() {
            return Err(ParseError::ChainedComparison { line: self.tokens.line() }.into());
        }

        Ok(Expr::Comparison { left: Box::new(left),
                              op,
                              right: Box::new(right),
                              line })
    }

    /// Parses addition and subtraction expressions.
    ///
    /// Handles left-associative binary operators: `+` and `-`.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    pub(in crate::interpreter::parser) fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some(op) = token_to_binary_operator(self.tokens.current())
              && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let (_, line) = self.tokens.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }

    /// Parses multiplication-level expressions.
    ///
    /// Handles left-associative operators: `*` and `/`.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    pub(in crate::interpreter::parser) fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        while let Some(op) = token_to_binary_operator(self.tokens.current())
              && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let (_, line) = self.tokens.advance();
            let right = self.parse_unary()?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
        }
        Ok(left)
    }
}

/// Maps a token to its arithmetic operator, if it is one.
pub(in crate::interpreter::parser) const fn token_to_binary_operator(token: &Token)
                                                                     -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
pub(in crate::interpreter::parser) const fn token_to_comparison_operator(
    token: &Token)
    -> Option<ComparisonOperator> {
    match token {
        Token::EqualEqual => Some(ComparisonOperator::Equal),
        Token::BangEqual => Some(ComparisonOperator::NotEqual),
        Token::Greater => Some(ComparisonOperator::Greater),
        Token::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        Token::Less => Some(ComparisonOperator::Less),
        Token::LessEqual => Some(ComparisonOperator::LessEqual),
        _ => None,
    }
}
