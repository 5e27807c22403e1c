use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Consumes `token`, or fails naming what was expected.
    ///
    /// # Parameters
    /// - `token`: The required token.
    /// - `expected`: Human-readable description for the error, e.g. `"';'"`.
    ///
    /// # Errors
    /// `ParseError::Expected` with the token actually found.
    pub(in crate::interpreter::parser) fn expect_token(&mut self,
                                                       token: &Token,
                                                       expected: &str)
                                                       -> ParseResult<()> {
        if self.tokens.eat(token) {
            return Ok(());
        }
        Err(ParseError::Expected { expected: expected.to_string(),
                                   found:    self.tokens.current().to_string(),
                                   line:     self.tokens.line(), }.into())
    }

    /// Parses a comma-separated list of items until a closing token.
    ///
    /// This utility is shared by table literals, parameter lists and
    /// argument lists. It repeatedly calls `parse_item` to parse one element,
    /// expecting either:
    ///
    /// - a comma, to continue the list, or
    /// - the specified closing token, to end it.
    ///
    /// An immediately encountered closing token produces an empty list.
    ///
    /// Grammar (simplified): `list := item ("," item)*`
    ///
    /// # Parameters
    /// - `parse_item`: Function used to parse each list element.
    /// - `closing`: The token that terminates the list (e.g., `]` or `)`).
    ///
    /// # Returns
    /// A vector of parsed items.
    ///
    /// # Errors
    /// Returns a `ParseError` if:
    /// - an item fails to parse (this covers leading and doubled commas),
    /// - a comma is directly followed by the closing token,
    /// - anything else follows an item.
    pub(in crate::interpreter::parser) fn parse_comma_separated<T>(
        &mut self,
        parse_item: impl Fn(&mut Self) -> ParseResult<T>,
        closing: &Token)
        -> ParseResult<Vec<T>> {
        let mut items = Vec::new();
        if self.tokens.eat(closing) {
            return Ok(items);
        }
        loop {
            items.push(parse_item(self)?);

            if self.tokens.eat(&Token::Comma) {
                if self.tokens.current() == closing {
                    return Err(ParseError::TrailingComma { line: self.tokens.line() }.into());
                }
                continue;
            }
            if self.tokens.eat(closing) {
                break;
            }
            return Err(ParseError::Expected { expected: format!("',' or '{closing}'"),
                                              found:    self.tokens.current().to_string(),
                                              line:     self.tokens.line(), }.into());
        }
        Ok(items)
    }

    /// Parses a plain identifier and returns its name.
    ///
    /// # Errors
    /// `ParseError::Expected` if the current token is not an identifier.
    pub(in crate::interpreter::parser) fn parse_identifier(&mut self) -> ParseResult<String> {
        match self.tokens.current() {
            Token::Identifier(name) => {
                let name = name.clone();
                self.tokens.advance();
                Ok(name)
            },
            other => Err(ParseError::Expected { expected: "identifier".to_string(),
                                                found:    other.to_string(),
                                                line:     self.tokens.line(), }.into()),
        }
    }
}
