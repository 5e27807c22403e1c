/// Parser state and entry points.
///
/// Defines the `Parser` cursor, the shared result type and the program and
/// expression entry points.
pub mod core;

/// Unary, postfix and primary expressions.
///
/// Handles sign prefixes, call and index chains, literals, function literals
/// and table literals.
pub mod unary;

/// Binary expressions.
///
/// Implements the comparison, additive and multiplicative precedence levels.
pub mod binary;

/// Block parsing.
///
/// Parses brace-delimited statement sequences.
pub mod block;

/// Utility functions for the parser.
///
/// Provides token expectations and comma-separated list handling.
pub mod utils;

/// Statement parsing.
///
/// Implements assignments, control flow, `Return` and `Get` imports.
pub mod statement;
