//! # glint
//!
//! glint is a small embeddable expression language. A host hands it a source
//! string together with a table of variables and native functions, and gets a
//! single value back: a number, a string, a boolean, `nil` or a function.
//!
//! Strings support interpolation (`"Total: \(price * 2)"`) and any function in
//! the table can be called as a method on a value (`price.formatted(2)`).

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches byte offsets to operator, call and name nodes for error
///   reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// Scanning cannot fail, so every failure is either a `ParseError` or a
/// `RuntimeError`. Both carry the byte offset of the construct at fault, and
/// `Error` wraps either one for callers that do not care which phase failed.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations, and exposes the `Interpreter` a host embeds.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating source text.
pub mod interpreter;
/// General utilities for number formatting and safe numeric conversion.
pub mod util;

pub use crate::{
    error::{Error, ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        value::{callable::Callable, core::Value, variable::Variable},
    },
};

/// Interprets `source` once against the given tables.
///
/// This is shorthand for building an [`Interpreter`] and calling
/// [`Interpreter::interpret`]. Hosts that evaluate many expressions against
/// the same tables should keep an `Interpreter` around instead.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use glint::{Value, Variable, interpret};
///
/// let variables = vec![Variable::new("price", 12.5), Variable::new("name", "Widget")];
///
/// let result = interpret("\"\\(name): \\(price * 2)\"", variables, Vec::new());
/// assert_eq!(result, Ok(Value::from("Widget: 25")));
///
/// // Dividing by zero is an error the host can recover from.
/// assert!(interpret("price / 0", Vec::new(), Vec::new()).is_err());
/// ```
pub fn interpret(source: &str,
                 variables: Vec<Variable>,
                 functions: Vec<Callable>)
                 -> Result<Value, Error> {
    Interpreter::new(variables, functions).interpret(source)
}
