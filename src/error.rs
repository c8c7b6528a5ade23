/// Lexing errors.
///
/// Raised while turning source text into tokens: characters outside the
/// calculator's alphabet and numeric literals that cannot be read.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors include unbalanced parentheses, missing operands and
/// tokens left over after a complete expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// division by zero or exponentiation outside the real domain.
pub mod runtime_error;
/// The aggregate error returned by the evaluation entry point.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
