use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{SpannedToken, Token},
        parser::{binary::parse_binary, unary::parse_primary},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest expression tree the parser builds. Groups, signs, right operands
/// and every folded operator each add a level. Parsing, evaluation and
/// dropping the tree all recurse once per level.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Parses a complete token sequence into a single expression tree.
///
/// The whole sequence must be consumed: after the expression, the next token
/// has to be [`Token::EndOfInput`].
///
/// # Errors
/// - `UnexpectedTrailingTokens` if tokens remain after the expression, as in
///   `1 2`.
/// - `NestingTooDeep` if the expression nests deeper than
///   [`MAX_NESTING_DEPTH`].
/// - Propagates any errors from expression parsing.
///
/// # Example
/// ```
/// use ferrocalc::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(parse(&tokens).unwrap().to_string(), "(+ 2 (* 3 4))");
///
/// let tokens = tokenize("1 2").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[SpannedToken]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, 0, 0)?;

    match iter.peek() {
        Some((Token::EndOfInput, _)) | None => Ok(expr),
        Some((token, position)) => {
            Err(ParseError::UnexpectedTrailingTokens { token:    token.to_string(),
                                                       position: *position, })
        },
    }
}

/// Parses an expression whose operators all bind at least as tightly as
/// `min_precedence`.
///
/// This is the precedence-climbing entry point: a primary is parsed first,
/// then [`parse_binary`] extends it with every qualifying infix operator.
/// Passing `0` parses a full expression.
///
/// Grammar: `expression := primary (operator expression)*`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, position)` pairs.
/// - `min_precedence`: Weakest operator allowed to extend the expression.
/// - `depth`: Current nesting level, `0` at the top.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_precedence: u8,
                               depth: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a SpannedToken>
{
    let left = parse_primary(tokens, depth)?;
    parse_binary(tokens, left, min_precedence, depth)
}
