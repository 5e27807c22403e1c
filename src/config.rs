/// Default bound on the length of a single lexeme, in characters.
pub const DEFAULT_MAX_LEXEME_LEN: usize = 21;
/// Default bound on nested function calls. Deep enough for ordinary
/// recursion while staying inside a 2 MiB thread stack.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 64;
/// Default bound on syntactic nesting: parenthesized, bracketed and argument
/// expressions plus brace-delimited blocks.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 100;

/// Tunable limits of an interpreter instance.
///
/// None of the limits is part of the language; they only guard the host
/// against pathological input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Longest accepted token, measured on its source text.
    pub max_lexeme_len:    usize,
    /// Deepest accepted chain of active function calls.
    pub max_call_depth:    usize,
    /// Deepest accepted nesting of expressions and blocks while parsing.
    pub max_nesting_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_lexeme_len:    DEFAULT_MAX_LEXEME_LEN,
               max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH, }
    }
}
