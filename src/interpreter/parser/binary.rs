use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::token::Token,
        parser::{core::ParseResult, unary::parse_unary, utils::token_to_binary_operator},
    },
};

/// Consumes the next token if it is one of the binary operators in `ops`,
/// returning the operator and its offset.
fn advance_operator<'a, I>(tokens: &mut Peekable<I>,
                           ops: &[BinaryOperator])
                           -> Option<(BinaryOperator, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = tokens.peek()?;
    let op = token_to_binary_operator(&token.kind).filter(|op| ops.contains(op))?;
    let offset = token.offset;
    tokens.next();
    Some((op, offset))
}

/// Parses equality expressions.
///
/// Handles left-associative binary operators: `==` and `!=`.
///
/// The rule is: `equality := comparison (("==" | "!=") comparison)*`
///
/// # Parameters
/// - `tokens`: Significant tokens.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_comparison(tokens)?;
    while let Some((op, offset)) =
        advance_operator(tokens, &[BinaryOperator::Equal, BinaryOperator::NotEqual])
    {
        let right = parse_comparison(tokens)?;
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}

/// Parses relational expressions.
///
/// Handles left-associative operators: `>`, `>=`, `<` and `<=`.
///
/// The rule is: `comparison := term ((">" | ">=" | "<" | "<=") term)*`
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;
    while let Some((op, offset)) = advance_operator(tokens,
                                                    &[BinaryOperator::Greater,
                                                      BinaryOperator::GreaterEqual,
                                                      BinaryOperator::Less,
                                                      BinaryOperator::LessEqual])
    {
        let right = parse_term(tokens)?;
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// `+` doubles as string concatenation; which one applies is decided at
/// evaluation time.
///
/// The rule is: `term := factor (("+" | "-") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    while let Some((op, offset)) =
        advance_operator(tokens, &[BinaryOperator::Add, BinaryOperator::Sub])
    {
        let right = parse_factor(tokens)?;
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// The rule is: `factor := unary (("*" | "/") unary)*`
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_unary(tokens)?;
    while let Some((op, offset)) =
        advance_operator(tokens, &[BinaryOperator::Mul, BinaryOperator::Div])
    {
        let right = parse_unary(tokens)?;
        left = Expr::binary(left, op, right, offset);
    }
    Ok(left)
}
