/// The runtime value type.
///
/// Defines `Value`, the result of evaluating any expression, together with
/// the accessors the evaluator uses to demand a particular variant.
pub mod core;
/// Table values.
///
/// Defines `Table`, a shared mutable map, and `TableKey`, the hashable
/// projection of the values that may be used as keys.
///
/// Copies of a table value alias the same storage, so writes through one
/// binding are visible through every other.
pub mod table;
