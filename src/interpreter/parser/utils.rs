use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::token::{Literal, StringSegment, Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Returns `true` when the next significant token is `Eof`, or when the
/// stream is exhausted.
pub(in crate::interpreter::parser) fn at_end<'a, I>(tokens: &mut Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token>
{
    matches!(tokens.peek(), None | Some(Token { kind: TokenKind::Eof, .. }))
}

/// Consumes the next token if it is in the same category as any of
/// `expected`.
///
/// Payloads are ignored, so `TokenKind::Identifier(String::new())` accepts
/// any identifier.
pub(in crate::interpreter::parser) fn advance_if<'a, I>(tokens: &mut Peekable<I>,
                                                        expected: &[TokenKind])
                                                        -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|token| expected.iter().any(|kind| token.kind.same_category(kind)))
}

/// Builds the error for a missing token, distinguishing end of input.
fn unexpected<F>(token: Option<&Token>, error: F) -> ParseError
    where F: FnOnce(String, usize) -> ParseError
{
    match token {
        Some(Token { kind: TokenKind::Eof, offset, .. }) => {
            ParseError::UnexpectedEndOfInput { offset: *offset }
        },
        Some(token) => error(token.to_string(), token.offset),
        None => ParseError::UnexpectedEndOfInput { offset: 0 },
    }
}

/// Consumes the `)` that closes a grouping or an argument list.
///
/// # Errors
/// Returns `ExpectedClosingParen` when another token is found, and
/// `UnexpectedEndOfInput` when the input ends first.
pub(in crate::interpreter::parser) fn expect_closing_paren<'a, I>(tokens: &mut Peekable<I>)
                                                                  -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    advance_if(tokens, &[TokenKind::RightParen]).ok_or_else(|| {
        unexpected(tokens.peek().copied(), |token, offset| {
            ParseError::ExpectedClosingParen { token, offset }
        })
    })
}

/// Consumes the identifier following a `.` and returns it with its offset.
///
/// # Errors
/// Returns `ExpectedMethodName` when the next token is not an identifier.
pub(in crate::interpreter::parser) fn expect_method_name<'a, I>(tokens: &mut Peekable<I>)
                                                                -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Token>
{
    match advance_if(tokens, &[TokenKind::Identifier(String::new())]) {
        Some(Token { kind: TokenKind::Identifier(name),
                     offset,
                     .. }) => Ok((name.clone(), *offset)),
        _ => Err(unexpected(tokens.peek().copied(), |token, offset| {
                 ParseError::ExpectedMethodName { token, offset }
             })),
    }
}

/// Consumes the `)` that closes a string interpolation.
///
/// # Errors
/// Returns `ExpectedInterpolationEnd` when another token is found.
pub(in crate::interpreter::parser) fn expect_interpolation_end<'a, I>(tokens: &mut Peekable<I>)
                                                                      -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    let end = TokenKind::Literal(Literal::String(StringSegment::InterpolationEnd));
    match advance_if(tokens, &[end]) {
        Some(_) => Ok(()),
        None => Err(unexpected(tokens.peek().copied(), |token, offset| {
                    ParseError::ExpectedInterpolationEnd { token, offset }
                })),
    }
}

/// Parses a comma-separated argument list up to and including the closing
/// `)`. The opening `(` has already been consumed. An immediately
/// encountered `)` produces an empty list.
///
/// Grammar: `args := expression ("," expression)*`
///
/// # Errors
/// Returns a `ParseError` if an argument fails to parse or the list is not
/// closed.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(tokens: &mut Peekable<I>)
                                                             -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a Token>
{
    let mut arguments = Vec::new();
    if advance_if(tokens, &[TokenKind::RightParen]).is_some() {
        return Ok(arguments);
    }
    loop {
        arguments.push(parse_expression(tokens)?);
        if advance_if(tokens, &[TokenKind::Comma]).is_none() {
            expect_closing_paren(tokens)?;
            break;
        }
    }
    Ok(arguments)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators of this
/// grammar. `&&`, `||`, `and` and `or` are scanned but have no grammar slot.
///
/// # Example
/// ```
/// use glint::{
///     ast::BinaryOperator,
///     interpreter::{lexer::token::TokenKind, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::AmpersandAmpersand), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::EqualEqual => Some(BinaryOperator::Equal),
        TokenKind::BangEqual => Some(BinaryOperator::NotEqual),
        TokenKind::Greater => Some(BinaryOperator::Greater),
        TokenKind::GreaterEqual => Some(BinaryOperator::GreaterEqual),
        TokenKind::Less => Some(BinaryOperator::Less),
        TokenKind::LessEqual => Some(BinaryOperator::LessEqual),
        _ => None,
    }
}
