use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::token::{Literal, StringSegment, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::expect_interpolation_end,
        },
    },
};

/// Parses the segments of a string literal after its opening quote.
///
/// Plaintext chunks become `LiteralString` nodes and every `\( ... )`
/// becomes a `StringInterpolation` around an expression parsed with the
/// top-level `expression` rule. The segments are then folded
/// left-associatively with `+`, so `"a\(x)b"` becomes `("a" + x) + "b"`.
///
/// Grammar:
/// ```text
///     string  := START segment* END
///     segment := PLAINTEXT | INTERPOLATION_START expression INTERPOLATION_END
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening quote.
/// - `offset`: Offset of the opening quote, used for the `+` nodes.
///
/// # Errors
/// Returns a `ParseError` if an interpolated expression is malformed or not
/// closed, or the literal has no closing quote.
pub(crate) fn parse_string_literal<'a, I>(tokens: &mut Peekable<I>,
                                          offset: usize)
                                          -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut segments = Vec::new();

    loop {
        let token = tokens.next()
                          .ok_or(ParseError::UnterminatedString { offset })?;

        match &token.kind {
            TokenKind::Literal(Literal::String(StringSegment::Plaintext(text))) => {
                segments.push(Expr::LiteralString(text.clone()));
            },
            TokenKind::Literal(Literal::String(StringSegment::InterpolationStart)) => {
                let expr = parse_expression(tokens)?;
                expect_interpolation_end(tokens)?;
                segments.push(Expr::StringInterpolation { expr:   Box::new(expr),
                                                          offset: token.offset, });
            },
            TokenKind::Literal(Literal::String(StringSegment::End)) => break,
            TokenKind::Eof => return Err(ParseError::UnterminatedString { offset }),
            _ => {
                return Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                                         offset: token.offset, });
            },
        }
    }

    Ok(fold_segments(segments, offset))
}

/// Joins string segments with `+`, left to right.
///
/// No segments at all is the empty string; a single segment stands alone.
fn fold_segments(segments: Vec<Expr>, offset: usize) -> Expr {
    segments.into_iter()
            .reduce(|left, right| Expr::binary(left, BinaryOperator::Add, right, offset))
            .unwrap_or_else(|| Expr::LiteralString(String::new()))
}
