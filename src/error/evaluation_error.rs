use crate::interpreter::value::ValueType;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a compiled
/// expression.
pub enum EvaluationError {
    /// Integral or decimal division (or remainder) by zero.
    DivideByZero,
    /// A binary operator was applied to a pair of types it does not accept.
    UnsupportedOperands {
        /// Symbol of the operator, e.g. `+`.
        operator: &'static str,
        /// Type of the left operand.
        left:     ValueType,
        /// Type of the right operand.
        right:    ValueType,
    },
    /// A unary operator was applied to a type it does not accept.
    UnsupportedOperand {
        /// Symbol of the operator, e.g. `~`.
        operator: &'static str,
        /// Type of the operand.
        operand:  ValueType,
    },
    /// A cast between two types that cannot be converted.
    InvalidCast {
        /// Type of the value being cast.
        from: ValueType,
        /// The requested target type.
        to:   ValueType,
    },
    /// A `{N}` reference beyond the number of supplied values.
    VariableIndexOutOfRange {
        /// The referenced index.
        index: usize,
        /// Number of values in the context.
        count: usize,
    },
    /// An operator other than `==`/`!=` was applied to `null`.
    NullOperand {
        /// Symbol of the operator.
        operator: &'static str,
    },
    /// A decimal computation or conversion left the representable range.
    Overflow {
        /// Symbol of the operator, or the cast target name.
        operator: &'static str,
    },
}

impl std::fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivideByZero => write!(f, "divide by zero"),
            Self::UnsupportedOperands { operator, left, right } => write!(f,
                                                                          "unsupported operand types for '{operator}': {left} and {right}"),
            Self::UnsupportedOperand { operator, operand } => {
                write!(f, "unsupported operand type for '{operator}': {operand}")
            },
            Self::InvalidCast { from, to } => write!(f, "invalid cast from {from} to {to}"),
            Self::VariableIndexOutOfRange { index, count } => write!(f,
                                                                     "variable index {index} out of range ({count} values supplied)"),
            Self::NullOperand { operator } => {
                write!(f, "operator '{operator}' cannot be applied to null")
            },
            Self::Overflow { operator } => write!(f, "arithmetic overflow in '{operator}'"),
        }
    }
}

impl std::error::Error for EvaluationError {}
