/// The evaluator module walks the expression tree and computes values.
///
/// The evaluator resolves identifiers against the host's tables, applies
/// operators, binds method receivers and invokes native functions. It is the
/// last stage of interpretation and the only one that can fail at runtime.
///
/// # Responsibilities
/// - Evaluates AST nodes, children before parents and left to right.
/// - Resolves variables and functions, including the built-in standard
///   library.
/// - Reports runtime errors such as division by zero or calling a non-function.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads the raw source and produces a stream of tokens, each
/// carrying the exact text it covers and its byte offset. String literals are
/// split into segments so that interpolated expressions are tokenized in
/// place. This is the first stage of interpretation and it never fails.
///
/// # Responsibilities
/// - Converts the input into tokens whose lexemes reassemble the source.
/// - Handles number and string literals, identifiers, keywords and operators.
/// - Turns unknown characters and unterminated strings into inert trivia.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser drops insignificant tokens and runs a recursive descent over
/// the rest, one function per precedence level. A source holds at most one
/// expression.
///
/// # Responsibilities
/// - Converts tokens into `Expr` nodes wrapped in a statement.
/// - Desugars interpolated strings into `+` chains.
/// - Reports syntax errors with the offending token and its offset.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, text, booleans, `nil` and native functions. The module
/// also holds the host-facing `Variable` binding and the conversions a host
/// uses to move values in and out of the interpreter.
pub mod value;
