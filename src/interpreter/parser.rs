/// Parser entry points.
///
/// Turns a full token stream into statements and exposes the top-level
/// `expression` production that every other rule recurses into.
pub mod core;

/// Binary operator parsing.
///
/// One function per precedence level, from equality down to
/// multiplication, each building left-leaning trees.
pub mod binary;

/// Prefix operators, call and method suffixes, and primary expressions.
pub mod unary;

/// String literal parsing.
///
/// Folds plaintext chunks and interpolated expressions into a `+` chain.
pub mod string;

/// Token matching helpers shared by the grammar rules.
pub mod utils;
