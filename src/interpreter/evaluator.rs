/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation and comparisons.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the sign operators.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context, expression
/// dispatch and scope handling.
pub mod core;

/// Statement execution.
///
/// Runs assignments, blocks, imports, control flow and `Return`.
pub mod statement;

/// Table evaluation.
///
/// Builds table literals, reads entries and writes indexed assignments.
pub mod table;

/// Function evaluation.
///
/// Handles calls to user-defined functions: frame setup, argument binding
/// and return value collection.
pub mod function;
