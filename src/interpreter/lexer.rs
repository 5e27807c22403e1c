use logos::Logos;

use crate::{error::LexError, interpreter::token_stream::TokenStream};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
///
/// Keywords are exact `#[token]` patterns and win over the identifier regex
/// when both match the same text, so `True` is a keyword while `Trueish` is
/// an identifier. Two-character operators win over their one-character
/// prefixes because the longest match is taken.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFailure)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `0.5` or `12.25`.
    #[regex(r"[0-9]+(\.[0-9]*)*", parse_number)]
    Number(f64),
    /// Boolean literal tokens: `True` or `False`.
    #[token("True", |_| true)]
    #[token("False", |_| false)]
    Bool(bool),
    /// `Function`
    #[token("Function")]
    Function,
    /// `If`
    #[token("If")]
    If,
    /// `Else`
    #[token("Else")]
    Else,
    /// `Loop`
    #[token("Loop")]
    Loop,
    /// `Get`
    #[token("Get")]
    Get,
    /// `Return`
    #[token("Return")]
    Return,
    /// Identifier tokens; variable names such as `x` or `square`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// Quoted string tokens. The value is the text between the quotes.
    #[regex(r#""[^"\n]*"?"#, parse_quoted_string, allow_greedy = true)]
    QuotedString(String),
    /// `# Comments #` on a single line.
    #[regex(r"#[^#\n]*#", logos::skip, allow_greedy = true)]
    Comment,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `=&`
    #[token("=&")]
    RefAssign,
    /// `>`
    #[token(">")]
    Greater,
    /// `<`
    #[token("<")]
    Less,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `,`
    #[token(",")]
    Comma,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
    /// End-of-stream sentinel. Never produced by logos itself; appended by
    /// [`tokenize`].
    Eof,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Failure reported by a single logos match, turned into a [`LexError`] once
/// the offending slice and line are known.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFailure {
    /// No pattern matches at this position.
    #[default]
    InvalidCharacter,
    /// A number with a dangling or repeated decimal point.
    MalformedNumber,
    /// A quote that is never closed on its line.
    UnterminatedString,
}

/// Parses a numeric literal from the current token slice.
///
/// The regex accepts any run of digits and dots starting with a digit, so
/// that `1.`, `1..2` and `1.2.3` arrive here whole and are rejected instead
/// of being split into several tokens.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, LexFailure> {
    let slice = lex.slice();
    let well_formed = match slice.split_once('.') {
        None => true,
        Some((_, fraction)) => !fraction.is_empty() && !fraction.contains('.'),
    };
    if !well_formed {
        return Err(LexFailure::MalformedNumber);
    }
    slice.parse().map_err(|_| LexFailure::MalformedNumber)
}

/// Strips the quotes from a quoted string slice.
fn parse_quoted_string(lex: &logos::Lexer<Token>) -> Result<String, LexFailure> {
    let slice = lex.slice();
    if slice.len() < 2 || !slice.ends_with('"') {
        return Err(LexFailure::UnterminatedString);
    }
    Ok(slice[1..slice.len() - 1].to_string())
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::QuotedString(s) => write!(f, "\"{s}\""),
            Self::Eof => write!(f, "end of input"),
            other => {
                let symbol = match other {
                    Self::Function => "Function",
                    Self::If => "If",
                    Self::Else => "Else",
                    Self::Loop => "Loop",
                    Self::Get => "Get",
                    Self::Return => "Return",
                    Self::EqualEqual => "==",
                    Self::BangEqual => "!=",
                    Self::GreaterEqual => ">=",
                    Self::LessEqual => "<=",
                    Self::RefAssign => "=&",
                    Self::Greater => ">",
                    Self::Less => "<",
                    Self::Equals => "=",
                    Self::Plus => "+",
                    Self::Minus => "-",
                    Self::Star => "*",
                    Self::Slash => "/",
                    Self::LParen => "(",
                    Self::RParen => ")",
                    Self::LBrace => "{",
                    Self::RBrace => "}",
                    Self::LBracket => "[",
                    Self::RBracket => "]",
                    Self::Semicolon => ";",
                    Self::Colon => ":",
                    Self::Comma => ",",
                    _ => "whitespace",
                };
                write!(f, "{symbol}")
            },
        }
    }
}

/// Converts source text into a [`TokenStream`].
///
/// Every token is paired with the line it starts on. The stream always ends
/// with [`Token::Eof`].
///
/// # Parameters
/// - `source`: The text to tokenize.
/// - `max_lexeme_len`: Longest accepted token, in characters.
///
/// # Returns
/// The token stream, positioned at the first token.
///
/// # Errors
/// Returns a [`LexError`] for characters that start no token, malformed
/// numbers, unterminated strings and tokens longer than `max_lexeme_len`.
///
/// # Example
/// ```
/// use quill::interpreter::{lexer::{Token, tokenize}, token_stream::TokenStream};
///
/// let tokens = tokenize("a =& 1.5;", 21).unwrap();
/// assert_eq!(tokens.current(), &Token::Identifier("a".to_string()));
/// assert_eq!(tokens.remaining(), 4);
/// ```
pub fn tokenize(source: &str, max_lexeme_len: usize) -> Result<TokenStream, LexError> {
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        let slice = lexer.slice();
        match result {
            Ok(token) => {
                let length = slice.chars().count();
                if length > max_lexeme_len {
                    return Err(LexError::TokenTooLong { lexeme: slice.to_string(),
                                                        max: max_lexeme_len,
                                                        line });
                }
                tokens.push((token, line));
            },
            Err(LexFailure::InvalidCharacter) => {
                let character = slice.chars().next().map(String::from).unwrap_or_default();
                return Err(LexError::InvalidCharacter { character, line });
            },
            Err(LexFailure::MalformedNumber) => {
                return Err(LexError::MalformedNumber { lexeme: slice.to_string(),
                                                       line });
            },
            Err(LexFailure::UnterminatedString) => {
                return Err(LexError::UnterminatedString { line });
            },
        }
    }

    tokens.push((Token::Eof, lexer.extras.line));
    tracing::trace!(count = tokens.len(), "tokenized source");

    Ok(TokenStream::new(tokens))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        let mut stream = tokenize(source, 21).unwrap();
        let mut out = Vec::new();
        while !stream.is_at_end() {
            out.push(stream.advance().0);
        }
        out
    }

    #[test]
    fn keywords_win_over_identifiers() {
        assert_eq!(kinds("True Trueish Get"),
                   vec![Token::Bool(true), Token::Identifier("Trueish".to_string()), Token::Get]);
    }

    #[test]
    fn two_character_operators_win() {
        assert_eq!(kinds("a=&b==c=d"),
                   vec![Token::Identifier("a".to_string()),
                        Token::RefAssign,
                        Token::Identifier("b".to_string()),
                        Token::EqualEqual,
                        Token::Identifier("c".to_string()),
                        Token::Equals,
                        Token::Identifier("d".to_string())]);
    }

    #[test]
    fn comments_and_strings() {
        assert_eq!(kinds("# note # \"hi there\";"),
                   vec![Token::QuotedString("hi there".to_string()), Token::Semicolon]);
    }

    #[test]
    fn numbers() {
        assert_eq!(kinds("3 0.25"), vec![Token::Number(3.0), Token::Number(0.25)]);
    }

    #[test]
    fn malformed_numbers_are_rejected() {
        for source in ["1.", "1..2", "1.2.3"] {
            assert!(matches!(tokenize(source, 21), Err(LexError::MalformedNumber { .. })),
                    "{source}");
        }
    }

    #[test]
    fn unterminated_string() {
        assert_eq!(tokenize("a = \"open;", 21).unwrap_err(),
                   LexError::UnterminatedString { line: 1 });
    }

    #[test]
    fn invalid_character_reports_line() {
        assert_eq!(tokenize("a = 1;\nb = $;", 21).unwrap_err(),
                   LexError::InvalidCharacter { character: "$".to_string(),
                                                line:      2, });
    }

    #[test]
    fn long_tokens_are_rejected() {
        let err = tokenize("abcdefghijklmnop = 1;", 8).unwrap_err();
        assert!(matches!(err, LexError::TokenTooLong { max: 8, line: 1, .. }));
    }

    #[test]
    fn lines_are_tracked() {
        let mut stream = tokenize("a\n\nb", 21).unwrap();
        assert_eq!(stream.advance(), (Token::Identifier("a".to_string()), 1));
        assert_eq!(stream.advance(), (Token::Identifier("b".to_string()), 3));
        assert_eq!(stream.current(), &Token::Eof);
    }
}
