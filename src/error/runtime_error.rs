#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The right operand of `/` evaluated to exactly zero.
    DivisionByZero {
        /// Character position of the `/` operator.
        position: usize,
    },
    /// The right operand of `%` evaluated to exactly zero.
    ModuloByZero {
        /// Character position of the `%` operator.
        position: usize,
    },
    /// Exponentiation left the real numbers or overflowed, e.g. `(-8) ^ 0.5`,
    /// `0 ^ -1` or `10 ^ 400`.
    DomainError {
        /// The base that was raised.
        base:     f64,
        /// The exponent it was raised to.
        exponent: f64,
        /// Character position of the `^` operator.
        position: usize,
    },
}

impl RuntimeError {
    /// Gets the character position of the operator that failed.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::DivisionByZero { position }
            | Self::ModuloByZero { position }
            | Self::DomainError { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Division by zero at position {position}.")
            },
            Self::ModuloByZero { position } => write!(f, "Modulo by zero at position {position}."),
            Self::DomainError { base,
                                exponent,
                                position, } => write!(f,
                                                      "Math domain error at position {position}: {base} ^ {exponent} has no finite real value."),
        }
    }
}

impl std::error::Error for RuntimeError {}
