#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that cannot start an expression.
    #[error("Error at offset {offset}: Expected expression, found {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// Reached the end of input while an expression was still expected.
    #[error("Error at offset {offset}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// Byte offset of the end of input.
        offset: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error at offset {offset}: Expected closing parenthesis ')' but found {token}.")]
    ExpectedClosingParen {
        /// The token found instead.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// A `.` was not followed by a method name.
    #[error("Error at offset {offset}: Expected method name after '.', found {token}.")]
    ExpectedMethodName {
        /// The token found instead.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// An interpolated expression was followed by something other than the
    /// closing `)`.
    #[error("Error at offset {offset}: Expected ')' to close the interpolation, found {token}.")]
    ExpectedInterpolationEnd {
        /// The token found instead.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
    /// A string literal ran out of tokens before its closing quote.
    #[error("Error at offset {offset}: Unterminated string literal.")]
    UnterminatedString {
        /// Byte offset of the opening quote.
        offset: usize,
    },
    /// Found extra tokens after the expression was complete.
    #[error("Error at offset {offset}: Extra tokens after expression: {token}.")]
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:  String,
        /// Byte offset of the token.
        offset: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::UnexpectedToken { offset, .. }
            | Self::UnexpectedEndOfInput { offset }
            | Self::ExpectedClosingParen { offset, .. }
            | Self::ExpectedMethodName { offset, .. }
            | Self::ExpectedInterpolationEnd { offset, .. }
            | Self::UnterminatedString { offset }
            | Self::UnexpectedTrailingTokens { offset, .. } => *offset,
        }
    }
}
