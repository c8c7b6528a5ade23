/// The evaluator module reduces syntax trees to numbers.
///
/// The evaluator traverses the AST bottom-up, applies each operator to the
/// values of its operands and reports runtime failures such as division by
/// zero. It holds no state between calls.
///
/// # Responsibilities
/// - Evaluates every AST node variant.
/// - Implements floored modulo and real-only exponentiation.
/// - Reports runtime errors with the position of the failing operator.
pub mod evaluator;
/// The lexer module tokenizes source text for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens: numbers, operators and parentheses, each paired with its character
/// position, closed by an end-of-input marker. This is the first stage of
/// evaluation.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Reads decimal literals with at most one decimal point.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser uses precedence climbing: a single expression routine
/// parameterised by a minimum precedence produces correctly grouped trees
/// for every operator level and associativity.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Resolves precedence, associativity and unary signs.
/// - Validates the token sequence, reporting errors with position info.
pub mod parser;
