/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// an expression tree: unexpected tokens, missing delimiters, unterminated
/// interpolations and leftover input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: operator
/// misuse on the wrong value types, unresolved functions and methods, failing
/// native calls and division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while interpreting a source string.
///
/// The scanner never fails, so this is either a syntax problem or an
/// evaluation problem. Both are recoverable; a host typically substitutes a
/// default value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The source could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The expression parsed but could not be evaluated.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
