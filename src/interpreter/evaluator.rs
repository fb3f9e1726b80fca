/// Core evaluation logic.
///
/// Contains the `Evaluator`, the recursive reduction of expressions, and the
/// short-circuiting of error values.
pub mod core;

/// Arithmetic operators.
///
/// Maps operator symbols to operations and performs checked integer
/// arithmetic, including division-by-zero and overflow detection.
pub mod arithmetic;
