/// The token model shared by the scanner and the parser.
///
/// Defines `Token`, `TokenKind` and the segments a string literal is split
/// into, along with the keyword table.
pub mod token;

/// The `logos` table for context-free lexemes.
///
/// Operators, brackets, digit runs, identifiers and whitespace are matched
/// here. Everything that needs lookahead or recursion is left to the scanner.
pub mod raw;

/// The scanner.
///
/// Drives the raw table one token at a time, finishes numbers and keywords,
/// and runs the string literal state machine that re-enters the scanner for
/// every `\( ... )` interpolation.
pub mod scanner;
