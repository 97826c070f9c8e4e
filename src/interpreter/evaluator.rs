/// Core evaluation logic.
///
/// Contains the `Interpreter`, the evaluation entry points, statement
/// execution and string interpolation.
pub mod core;

/// Unary operator evaluation.
///
/// Handles numeric negation and logical not.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, the overloaded `+`, relational comparisons and
/// structural equality.
pub mod binary;

/// Function evaluation.
///
/// Handles identifier resolution, calls, method binding and the built-in
/// standard library.
pub mod function;
