use std::iter::Peekable;

use crate::{
    ast::{Associativity, BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::core::{MAX_NESTING_DEPTH, ParseResult, parse_expression},
    },
};

/// Folds infix operators onto an already parsed left operand.
///
/// While the next token is an operator of precedence `min_precedence` or
/// higher, it is consumed and its right operand is parsed with a raised
/// threshold:
///
/// - left-associative operators (`+ - * / %`) use `precedence + 1`, so an
///   equal operator that follows ends the right operand and `10 - 3 - 2`
///   becomes `(10 - 3) - 2`;
/// - the right-associative `^` uses its own precedence, so `2 ^ 3 ^ 2`
///   becomes `2 ^ (3 ^ 2)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned after `left`.
/// - `left`: The operand parsed so far.
/// - `min_precedence`: Weakest operator this call may consume.
/// - `depth`: Nesting level of `left`; right operands sit one level deeper.
///
/// Every fold makes the tree one level deeper, so long chains such as
/// `1 + 1 + ... + 1` count towards [`MAX_NESTING_DEPTH`] as well.
///
/// # Returns
/// `left` extended with every qualifying operator, as an `Expr::BinaryOp`
/// tree.
///
/// # Errors
/// - `NestingTooDeep` if the folded tree grows past [`MAX_NESTING_DEPTH`].
/// - Propagates any errors from parsing right operands.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>,
                           mut left: Expr,
                           min_precedence: u8,
                           mut depth: usize)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    while let Some((token, position)) = tokens.peek() {
        let op = match token_to_binary_operator(token) {
            Some(op) if op.precedence() >= min_precedence => op,
            _ => break,
        };

        let position = *position;
        tokens.next(); // consume operator

        depth += 1;
        if depth > MAX_NESTING_DEPTH {
            return Err(ParseError::NestingTooDeep { position });
        }

        let next_min_precedence = match op.associativity() {
            Associativity::Left => op.precedence() + 1,
            Associativity::Right => op.precedence(),
        };
        let right = parse_expression(tokens, next_min_precedence, depth + 1)?;

        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                position };
    }

    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token is one of `+`, `-`, `*`,
/// `/`, `%` or `^`, and `None` for numbers, parentheses and the end marker.
///
/// # Example
/// ```
/// use ferrocalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Operator(BinaryOperator::Pow)),
///            Some(BinaryOperator::Pow));
/// assert_eq!(token_to_binary_operator(&Token::LeftParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Operator(op) => Some(*op),
        _ => None,
    }
}
