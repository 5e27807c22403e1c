use crate::interpreter::lexer::Token;

/// A cursor over the `(Token, line)` pairs produced by the lexer.
///
/// The underlying sequence always ends with [`Token::Eof`]; reading past the
/// end keeps returning that sentinel.
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens:   Vec<(Token, usize)>,
    position: usize,
}

impl TokenStream {
    /// Wraps a token sequence, appending [`Token::Eof`] if it is missing.
    #[must_use]
    pub fn new(mut tokens: Vec<(Token, usize)>) -> Self {
        if !matches!(tokens.last(), Some((Token::Eof, _))) {
            let line = tokens.last().map_or(1, |(_, line)| *line);
            tokens.push((Token::Eof, line));
        }
        Self { tokens,
               position: 0 }
    }

    fn entry(&self, index: usize) -> &(Token, usize) {
        let last = self.tokens.len() - 1;
        &self.tokens[index.min(last)]
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> &Token {
        &self.entry(self.position).0
    }

    /// The token after the current one (lookahead-2).
    #[must_use]
    pub fn peek_next(&self) -> &Token {
        &self.entry(self.position + 1).0
    }

    /// The line of the token under the cursor.
    #[must_use]
    pub fn line(&self) -> usize {
        self.entry(self.position).1
    }

    /// Consumes the current token and returns it with its line.
    pub fn advance(&mut self) -> (Token, usize) {
        let entry = self.entry(self.position).clone();
        if !self.is_at_end() {
            self.position += 1;
        }
        entry
    }

    /// Consumes the current token if it equals `expected`.
    ///
    /// Returns `true` when the token was consumed; otherwise the position is
    /// left unchanged.
    pub fn eat(&mut self, expected: &Token) -> bool {
        if self.current() == expected {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Number of tokens left before the end-of-stream sentinel.
    #[must_use]
    pub fn remaining(&self) -> usize {
        (self.tokens.len() - 1).saturating_sub(self.position)
    }

    /// Whether the cursor has reached [`Token::Eof`].
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }
}
