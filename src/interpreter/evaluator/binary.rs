/// Operator routing.
pub mod core;

/// Arithmetic on numbers and the overloaded `+`.
pub mod scalar;

/// Relational comparisons and structural equality.
pub mod comparison;
