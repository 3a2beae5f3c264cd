use crate::error::LexicalError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Every variant records the byte offset of the token that caused it so the
/// caller can point at the offending part of the expression.
pub enum ParseError {
    /// The lexer rejected the input.
    Lexical(LexicalError),
    /// A token was required but the input ended.
    UnexpectedEndOfInput {
        /// Length of the source, i.e. the offset just past the last token.
        position: usize,
    },
    /// A specific symbol was required but something else was found.
    ExpectedToken {
        /// The symbol that was required, for example `)`.
        expected: &'static str,
        /// Lexeme of the token actually found.
        found:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// An operand was required but the token cannot start one.
    ExpectedExpression {
        /// Lexeme of the token found.
        found:    String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// The word inside a cast does not name a known type.
    UnknownCastType {
        /// The unrecognised type name.
        name:     String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// A number token could not be interpreted as a numeric literal.
    InvalidNumber {
        /// The raw literal.
        literal:  String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// The content of a `{...}` reference is not a non-negative 32-bit
    /// integer literal.
    InvalidVariableIndex {
        /// The raw content found between the braces.
        literal:  String,
        /// The source position where the error occurred.
        position: usize,
    },
    /// Groups, prefix operators, casts or chained operators are nested past
    /// the parser's depth budget.
    NestingTooDeep {
        /// Position of the token at which the budget ran out.
        position: usize,
    },
    /// A token that is not legal here: a bare word other than `null`, or input
    /// left over once a complete expression has been parsed.
    UnexpectedInput {
        /// Lexeme of the unexpected token.
        token:    String,
        /// The source position where the error occurred.
        position: usize,
    },
}

impl ParseError {
    /// Byte offset in the source where the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lexical(e) => e.position(),
            Self::UnexpectedEndOfInput { position }
            | Self::ExpectedToken { position, .. }
            | Self::ExpectedExpression { position, .. }
            | Self::UnknownCastType { position, .. }
            | Self::InvalidNumber { position, .. }
            | Self::InvalidVariableIndex { position, .. }
            | Self::NestingTooDeep { position }
            | Self::UnexpectedInput { position, .. } => *position,
        }
    }
}

impl From<LexicalError> for ParseError {
    fn from(error: LexicalError) -> Self {
        Self::Lexical(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "{e}"),

            Self::UnexpectedEndOfInput { position } => {
                write!(f, "unexpected end of input at position {position}")
            },

            Self::ExpectedToken { expected,
                                  found,
                                  position, } => {
                write!(f, "expected '{expected}' but found '{found}' at position {position}")
            },

            Self::ExpectedExpression { found, position } => write!(f,
                                                                   "expected an expression but found '{found}' at position {position}"),

            Self::UnknownCastType { name, position } => {
                write!(f, "cannot cast to type '{name}' at position {position}")
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "invalid number '{literal}' at position {position}")
            },

            Self::InvalidVariableIndex { literal, position } => write!(f,
                                                                       "invalid variable index '{literal}' at position {position}"),

            Self::NestingTooDeep { position } => {
                write!(f, "expression nested too deeply at position {position}")
            },

            Self::UnexpectedInput { token, position } => {
                write!(f, "unexpected input '{token}' at position {position}")
            },
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            _ => None,
        }
    }
}
