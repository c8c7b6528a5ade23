/// Core parsing entry points.
///
/// Holds the top-level `parse` function, the shared result type and the
/// precedence-climbing expression loop.
pub mod core;

/// Binary operator parsing.
///
/// Maps tokens to infix operators and folds operator chains into trees
/// according to precedence and associativity.
pub mod binary;

/// Primary and prefix expression parsing.
///
/// Handles numbers, parenthesised groups and the unary sign operators.
pub mod unary;
