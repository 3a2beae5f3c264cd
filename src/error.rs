/// Lexical errors.
///
/// Raised by the lexer when the source text cannot be split into tokens, for
/// example because a string literal contains an unknown escape sequence.
pub mod lexical_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into a
/// node tree: unexpected tokens, unknown cast targets, malformed numeric
/// literals and leftover input.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while evaluating a compiled
/// expression, such as division by zero, unsupported operand types or invalid
/// casts.
pub mod evaluation_error;

pub use evaluation_error::EvaluationError;
pub use lexical_error::LexicalError;
pub use parse_error::ParseError;

/// Any failure produced by the one-step [`crate::evaluate`] entry point.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression could not be compiled.
    Parse(ParseError),
    /// The compiled expression failed while being evaluated.
    Evaluation(EvaluationError),
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<EvaluationError> for Error {
    fn from(error: EvaluationError) -> Self {
        Self::Evaluation(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "syntax error: {e}"),
            Self::Evaluation(e) => write!(f, "evaluation error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Evaluation(e) => Some(e),
        }
    }
}
