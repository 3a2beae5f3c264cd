#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while splitting source text into
/// tokens.
pub enum LexicalError {
    /// A backslash inside a string literal was followed by a character that
    /// does not form a known escape sequence.
    UnrecognizedEscape {
        /// The character following the backslash.
        escape:   char,
        /// Byte offset of the backslash in the source.
        position: usize,
    },
    /// A string literal was opened but never closed.
    UnterminatedString {
        /// Byte offset of the opening quote.
        position: usize,
    },
    /// A character that cannot start any token.
    UnrecognizedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
}

impl LexicalError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnrecognizedEscape { position, .. }
            | Self::UnterminatedString { position }
            | Self::UnrecognizedCharacter { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexicalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnrecognizedEscape { escape, position } => write!(f,
                                                                    "unrecognized escape sequence '\\{escape}' at position {position}"),
            Self::UnterminatedString { position } => {
                write!(f, "unterminated string literal at position {position}")
            },
            Self::UnrecognizedCharacter { character, position } => {
                write!(f, "unrecognized character '{character}' at position {position}")
            },
        }
    }
}

impl std::error::Error for LexicalError {}
