#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
///
/// Tokens are reported by their source text so messages read naturally.
pub enum ParseError {
    /// Found a token that cannot start an operand.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// Character position of the token.
        position: usize,
    },
    /// The input ended where an operand was required, as in `1 +`.
    UnexpectedEndOfInput {
        /// Character position of the end of input.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Character position where `)` was expected.
        position: usize,
    },
    /// Found extra tokens after a complete expression, as in `1 2`.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token:    String,
        /// Character position of the extra token.
        position: usize,
    },
    /// The expression tree would grow deeper than the parser allows, through
    /// nested groups, repeated signs or very long operator chains.
    NestingTooDeep {
        /// Character position of the token that crossed the limit.
        position: usize,
    },
}

impl ParseError {
    /// Gets the character position at which the error was raised.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::UnexpectedEndOfInput { position }
            | Self::ExpectedClosingParen { position }
            | Self::UnexpectedTrailingTokens { position, .. }
            | Self::NestingTooDeep { position } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Unexpected token '{token}' at position {position}.")
            },

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "Unexpected end of input at position {position}.")
            },

            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Expected closing parenthesis ')' at position {position} but none found."),

            Self::UnexpectedTrailingTokens { token, position } => write!(f,
                                                                         "Unexpected trailing token '{token}' at position {position} after a complete expression."),

            Self::NestingTooDeep { position } => {
                write!(f, "Expression is nested too deeply at position {position}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
