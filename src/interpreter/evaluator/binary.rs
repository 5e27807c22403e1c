/// Dispatch of binary operators over runtime values.
pub mod core;
/// Numeric arithmetic.
pub mod scalar;
/// Numeric comparisons.
pub mod comparison;
