use crate::error::{LexError, ParseError, RuntimeError};

/// Represents every way evaluating a piece of text can fail.
///
/// Each variant wraps the error of one pipeline stage, so callers can match
/// on the stage and still reach the detailed cause.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationError {
    /// The text contained something that is not a token.
    Lex(LexError),
    /// The tokens did not form a single well-formed expression.
    Parse(ParseError),
    /// The expression was well formed but could not be computed.
    Runtime(RuntimeError),
}

impl From<LexError> for EvaluationError {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for EvaluationError {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for EvaluationError {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvaluationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
