/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements against the scope chain, performing arithmetic, comparisons,
/// table operations and function calls.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, functions, tables and control flow.
/// - Reports runtime errors such as division by zero or type mismatches.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as numbers,
/// identifiers, quoted strings, operators, delimiters, and keywords. This is
/// the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens paired with their line.
/// - Skips whitespace and `# ... #` comments.
/// - Reports lexical errors for invalid or malformed input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the syntactic structure of the program. Imports are
/// resolved here, so the resulting program is self-contained.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates correct grammar and syntax, reporting errors with location info.
/// - Loads and parses files named by `Get` statements.
pub mod parser;
/// The scope module implements the chain of binding frames.
///
/// Frames live in an arena and refer to their parent by index. Frames are
/// pushed when entering `If`, `Loop` and function calls and popped when
/// leaving them.
pub mod scope;
/// The token stream module provides the parser's cursor over tokens.
pub mod token_stream;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// numbers, strings, booleans, `Null`, functions and tables.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines tables and the keys that may index them.
/// - Implements accessors that report type errors with a source line.
pub mod value;
