//! # ferrocalc
//!
//! ferrocalc is an arithmetic expression evaluator written in Rust.
//! It tokenizes, parses and evaluates expressions built from decimal numbers,
//! the operators `+ - * / % ^`, parentheses and unary signs, following the
//! usual precedence and associativity rules.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and the operator types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of expression node types.
/// - Holds the fixed operator precedence and associativity table.
/// - Attaches source positions to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while evaluating an
/// expression. It standardizes error reporting and carries the source
/// position of every failure.
///
/// # Responsibilities
/// - Defines one error enum per pipeline stage.
/// - Combines them into `EvaluationError` for the public entry point.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the three evaluation stages.
///
/// This module ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Exposes each stage for callers that need tokens or trees.
pub mod interpreter;
/// General helpers for presenting numeric results.
pub mod util;

pub use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::eval, lexer::tokenize, parser::core::parse},
};

/// Evaluates an arithmetic expression and returns its value.
///
/// The text is tokenized, parsed into a tree and evaluated. Each call is
/// independent: nothing is cached or shared between calls, so the function
/// can be used from any number of threads.
///
/// # Errors
/// - [`EvaluationError::Lex`] for characters outside the language or
///   malformed numbers.
/// - [`EvaluationError::Parse`] for structurally invalid input such as
///   unbalanced parentheses or missing operands.
/// - [`EvaluationError::Runtime`] for division or modulo by zero and
///   exponentiation without a finite real result.
///
/// # Examples
/// ```
/// use ferrocalc::{EvaluationError, error::RuntimeError, evaluate};
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate("-2 ^ 2").unwrap(), 4.0);
///
/// assert!(matches!(evaluate("5 / 0"),
///                  Err(EvaluationError::Runtime(RuntimeError::DivisionByZero { .. }))));
/// assert!(matches!(evaluate("(1 + 2"), Err(EvaluationError::Parse(_))));
/// ```
pub fn evaluate(source: &str) -> Result<f64, EvaluationError> {
    let tokens = tokenize(source)?;
    log::debug!("tokenized {} tokens from {source:?}", tokens.len());

    let ast = parse(&tokens)?;
    log::debug!("parsed {ast}");

    let value = eval(&ast)?;
    log::debug!("evaluated {ast} = {value}");

    Ok(value)
}
