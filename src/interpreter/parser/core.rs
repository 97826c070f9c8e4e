use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::token::{Token, TokenKind},
        parser::{binary::parse_equality, utils::at_end},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a scanned token stream into statements.
///
/// Trivia, whitespace, newlines and stray backslashes are dropped before any
/// grammar rule sees them. A stream with nothing significant in it yields no
/// statements; otherwise the stream must hold exactly one expression, and
/// anything after it is reported as trailing input.
///
/// Grammar: `program := expression? EOF`
///
/// # Errors
/// Returns a `ParseError` if the tokens do not form a single expression.
///
/// # Example
/// ```
/// use glint::{
///     ast::{BinaryOperator, Expr, Statement},
///     interpreter::{lexer::scanner::scan, parser::core::parse},
/// };
///
/// let statements = parse(&scan("1 + 2")).unwrap();
///
/// assert_eq!(statements,
///            vec![Statement::Expression(Expr::binary(Expr::LiteralNumber(1.0),
///                                                    BinaryOperator::Add,
///                                                    Expr::LiteralNumber(2.0),
///                                                    2))]);
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let mut tokens = tokens.iter()
                           .filter(|token| token.kind.is_significant())
                           .peekable();

    if at_end(&mut tokens) {
        trace!("parsed empty source");
        return Ok(Vec::new());
    }

    let expr = parse_expression(&mut tokens)?;

    if let Some(token) = tokens.next()
       && !at_end_token(token)
    {
        return Err(ParseError::UnexpectedTrailingTokens { token:  token.to_string(),
                                                          offset: token.offset, });
    }

    trace!("parsed expression statement");
    Ok(vec![Statement::Expression(expr)])
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing, also used for each
/// interpolated segment of a string literal. It begins at the
/// lowest-precedence level, equality, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := equality`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_equality(tokens)
}

const fn at_end_token(token: &Token) -> bool {
    matches!(token.kind, TokenKind::Eof)
}
