/// Core evaluation logic for expressions.
///
/// Contains the recursive tree walk and the shared result type.
pub mod core;

/// Unary operator evaluation.
///
/// Handles operations that take a single operand: negation and unary plus.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements evaluation for all infix arithmetic operations, including the
/// zero checks on division and modulo and the real-domain checks on
/// exponentiation.
pub mod binary;
