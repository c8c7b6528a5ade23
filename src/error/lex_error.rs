#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
///
/// Positions count characters, not bytes, from the start of the input.
pub enum LexError {
    /// Found a character that does not belong to any token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Character position where it was found.
        position:  usize,
    },
    /// A run of digits and decimal points that is not a valid number, such
    /// as `1.2.3`.
    MalformedNumber {
        /// The rejected run of characters.
        literal:  String,
        /// Character position where the run starts.
        position: usize,
    },
}

impl LexError {
    /// Gets the character position at which the error was raised.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. } | Self::MalformedNumber { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Unknown character '{character}' at position {position}.")
            },
            Self::MalformedNumber { literal, position } => write!(f,
                                                                  "Malformed number '{literal}' at position {position}: at most one decimal point is allowed."),
        }
    }
}

impl std::error::Error for LexError {}
