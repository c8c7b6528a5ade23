use logos::Logos;

use crate::{ast::BinaryOperator, error::LexError};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// A token paired with the character position where it starts.
pub type SpannedToken = (Token, usize);

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Every token sequence returned by [`tokenize`] ends with exactly one
/// [`Token::EndOfInput`].
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `2.`.
    Number(f64),
    /// One of `+`, `-`, `*`, `/`, `%` or `^`.
    Operator(BinaryOperator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// Marks the end of the token sequence.
    EndOfInput,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
            Self::EndOfInput => write!(f, "end of input"),
        }
    }
}

/// Failure categories reported by the generated lexer. The span and slice
/// are attached afterwards in [`tokenize`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LexErrorKind {
    #[default]
    UnknownCharacter,
    MalformedNumber,
}

/// Raw lexemes recognised by the generated scanner.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
enum Lexeme {
    /// A maximal run of digits and decimal points. A leading `.` must be
    /// followed by a digit.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    #[regex(r"\.[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl From<Lexeme> for Token {
    fn from(lexeme: Lexeme) -> Self {
        match lexeme {
            Lexeme::Number(value) => Self::Number(value),
            Lexeme::Plus => Self::Operator(BinaryOperator::Add),
            Lexeme::Minus => Self::Operator(BinaryOperator::Sub),
            Lexeme::Star => Self::Operator(BinaryOperator::Mul),
            Lexeme::Slash => Self::Operator(BinaryOperator::Div),
            Lexeme::Percent => Self::Operator(BinaryOperator::Mod),
            Lexeme::Caret => Self::Operator(BinaryOperator::Pow),
            Lexeme::LParen => Self::LeftParen,
            Lexeme::RParen => Self::RightParen,
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// The scanner accepts any run of digits and dots, so a run with a second
/// decimal point is rejected here.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Ok(f64)`: The parsed floating-point value.
/// - `Err(LexErrorKind::MalformedNumber)`: If the slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Result<f64, LexErrorKind> {
    let slice = lex.slice();
    if slice.matches('.').count() > 1 {
        return Err(LexErrorKind::MalformedNumber);
    }
    slice.parse().map_err(|_| LexErrorKind::MalformedNumber)
}

/// Converts byte offsets reported by the scanner into character positions.
///
/// Offsets must be queried in non-decreasing order, which keeps the whole
/// conversion linear in the length of the source.
struct CharPositions<'s> {
    source: &'s str,
    byte:   usize,
    chars:  usize,
}

impl<'s> CharPositions<'s> {
    const fn new(source: &'s str) -> Self {
        Self { source,
               byte: 0,
               chars: 0 }
    }

    fn at(&mut self, byte: usize) -> usize {
        self.chars += self.source[self.byte..byte].chars().count();
        self.byte = byte;
        self.chars
    }
}

/// Splits source text into tokens.
///
/// Whitespace is skipped. Numbers are read as `f64`; scientific notation is
/// not part of the language, so `1e5` stops at the unknown character `e`.
///
/// # Errors
/// - `LexError::UnknownCharacter` for any character that starts no token.
/// - `LexError::MalformedNumber` for a number with more than one `.`.
///
/// # Example
/// ```
/// use ferrocalc::{
///     ast::BinaryOperator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(.5 + 2)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LeftParen, 0),
///                 (Token::Number(0.5), 1),
///                 (Token::Operator(BinaryOperator::Add), 4),
///                 (Token::Number(2.0), 6),
///                 (Token::RightParen, 7),
///                 (Token::EndOfInput, 8)]);
///
/// assert_eq!(tokenize("").unwrap(), vec![(Token::EndOfInput, 0)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<SpannedToken>> {
    let mut tokens = Vec::new();
    let mut positions = CharPositions::new(source);
    let mut lexer = Lexeme::lexer(source);

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let position = positions.at(span.start);

        match lexeme {
            Ok(lexeme) => tokens.push((Token::from(lexeme), position)),
            Err(LexErrorKind::MalformedNumber) => {
                return Err(LexError::MalformedNumber { literal: lexer.slice().to_string(),
                                                       position });
            },
            Err(LexErrorKind::UnknownCharacter) => {
                let character = source[span.start..].chars().next().unwrap_or_default();
                return Err(LexError::UnknownCharacter { character,
                                                        position });
            },
        }
    }

    tokens.push((Token::EndOfInput, positions.at(source.len())));
    Ok(tokens)
}
