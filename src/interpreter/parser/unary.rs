use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Parses a primary expression.
///
/// Primary expressions are the operands of binary operators:
/// - numeric literals
/// - parenthesised expressions
/// - a `-` or `+` sign applied to another primary
///
/// A sign only captures the primary right after it, not a following operator
/// chain, so `-2 ^ 2` parses as `(-2) ^ 2`.
///
/// Grammar:
/// ```text
///     primary := number
///              | "(" expression ")"
///              | ("-" | "+") primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Nesting level of this primary. Every group, sign and right
///   operand around it adds one.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends where an operand is required.
/// - `UnexpectedToken` for `)`, `*`, `/`, `%` or `^` in operand position.
/// - `NestingTooDeep` once `depth` exceeds [`MAX_NESTING_DEPTH`].
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let (token, position) = tokens.peek()
                                  .map(|entry| **entry)
                                  .ok_or(ParseError::UnexpectedEndOfInput { position: 0 })?;

    if depth > MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { position });
    }

    match token {
        Token::Number(value) => {
            tokens.next();
            Ok(Expr::Number { value, position })
        },
        Token::LeftParen => parse_grouping(tokens, depth),
        Token::Operator(BinaryOperator::Sub) => parse_negation(tokens, position, depth),
        Token::Operator(BinaryOperator::Add) => {
            tokens.next();
            parse_primary(tokens, depth + 1)
        },
        Token::EndOfInput => Err(ParseError::UnexpectedEndOfInput { position }),
        Token::Operator(_) | Token::RightParen => {
            Err(ParseError::UnexpectedToken { token: token.to_string(),
                                              position })
        },
    }
}

/// Parses a unary minus and the primary it applies to.
///
/// Signs may repeat: `--2` is `-(-2)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `-`.
/// - `position`: Character position of the `-`.
/// - `depth`: Nesting level of the `-`.
///
/// # Returns
/// An [`Expr::UnaryOp`] with [`UnaryOperator::Negate`].
fn parse_negation<'a, I>(tokens: &mut Peekable<I>,
                         position: usize,
                         depth: usize)
                         -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    tokens.next();
    let expr = parse_primary(tokens, depth + 1)?;
    Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                       expr: Box::new(expr),
                       position })
}

/// Parses a parenthesised expression.
///
/// The group resets precedence, so anything may appear inside it.
///
/// # Errors
/// - `ExpectedClosingParen` if the group is not closed, as in `(1 + 2`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    tokens.next(); // consume '('
    let expr = parse_expression(tokens, 0, depth + 1)?;

    match tokens.peek() {
        Some((Token::RightParen, _)) => {
            tokens.next();
            Ok(expr)
        },
        Some((_, position)) => Err(ParseError::ExpectedClosingParen { position: *position }),
        None => Err(ParseError::ExpectedClosingParen { position: expr.position() }),
    }
}
