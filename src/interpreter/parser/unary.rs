use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::token::{Literal, StringSegment, Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            string::parse_string_literal,
            utils::{advance_if, expect_closing_paren, expect_method_name, parse_arguments},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-`  (numeric negation)
/// - `!`  (logical not)
///
/// Unary operators are right-associative, so an input like `!-x` is parsed as
/// `!( -x )`. Without a prefix operator the function delegates to
/// [`parse_call`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "!") unary
///            | call
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    if let Some(token) = advance_if(tokens, &[TokenKind::Minus, TokenKind::Bang]) {
        let op = match token.kind {
            TokenKind::Minus => UnaryOperator::Negate,
            _ => UnaryOperator::Not,
        };
        let operand = parse_unary(tokens)?;
        return Ok(Expr::Unary { op,
                                operand: Box::new(operand),
                                offset: token.offset });
    }
    parse_call(tokens)
}

/// Parses a primary expression followed by any number of call and method
/// suffixes.
///
/// Method access takes no arguments at the dot; `a.f(x)` is the method access
/// `a.f` followed by a call suffix `(x)` applied to the bound callable.
/// Suffixes chain, so `a.f(x).g()` nests four levels deep.
///
/// Grammar:
/// ```text
///     call := primary ( "(" args? ")" | "." IDENTIFIER )*
/// ```
///
/// # Errors
/// Returns a `ParseError` if an argument list is not closed or a `.` is not
/// followed by a method name.
pub(crate) fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut node = parse_primary(tokens)?;
    loop {
        if let Some(paren) = advance_if(tokens, &[TokenKind::LeftParen]) {
            let arguments = parse_arguments(tokens)?;
            node = Expr::Call { callee: Box::new(node),
                                arguments,
                                offset: paren.offset };
        } else if advance_if(tokens, &[TokenKind::Dot]).is_some() {
            let (method, offset) = expect_method_name(tokens)?;
            node = Expr::CallMethod { receiver: Box::new(node),
                                      method,
                                      offset };
        } else {
            break;
        }
    }
    Ok(node)
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := "false" | "true" | "nil"
///              | NUMBER | STRING
///              | "(" expression ")"
///              | IDENTIFIER
/// ```
///
/// # Errors
/// Returns `UnexpectedEndOfInput` at the end of the stream and
/// `UnexpectedToken` for any token that cannot start an expression.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.next()
                      .ok_or(ParseError::UnexpectedEndOfInput { offset: 0 })?;

    match &token.kind {
        TokenKind::Literal(Literal::Bool(b)) => Ok(Expr::LiteralBool(*b)),
        TokenKind::Literal(Literal::Nil) => Ok(Expr::LiteralNil),
        TokenKind::Literal(Literal::Number(n)) => Ok(Expr::LiteralNumber(*n)),
        TokenKind::Literal(Literal::String(StringSegment::Start)) => {
            parse_string_literal(tokens, token.offset)
        },
        TokenKind::LeftParen => parse_grouping(tokens),
        TokenKind::Identifier(name) => Ok(Expr::Identifier { name:   name.clone(),
                                                             offset: token.offset, }),
        TokenKind::Eof => Err(ParseError::UnexpectedEndOfInput { offset: token.offset }),
        _ => Err(ParseError::UnexpectedToken { token:  token.to_string(),
                                               offset: token.offset, }),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// Grammar: `grouping := "(" expression ")"`
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let inner = parse_expression(tokens)?;
    expect_closing_paren(tokens)?;
    Ok(Expr::Grouping(Box::new(inner)))
}
