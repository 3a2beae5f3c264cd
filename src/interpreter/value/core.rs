use rust_decimal::Decimal;

use crate::{
    error::EvaluationError,
    interpreter::{evaluator::core::EvalResult, value::ValueType},
};

/// Represents a runtime value in the interpreter.
///
/// This enum models every value an expression can produce or receive through
/// a `{N}` substitution. Values are immutable; operators always build new
/// ones.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The `null` literal. Only `==` and `!=` accept it.
    Null,
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// A string value.
    String(String),
    /// An 8-bit unsigned integer.
    Byte(u8),
    /// A 16-bit signed integer.
    Int16(i16),
    /// A 32-bit signed integer; the type of plain integer literals.
    Int32(i32),
    /// A 64-bit signed integer (`L` suffix).
    Int64(i64),
    /// A single precision float (`f` suffix).
    Single(f32),
    /// A double precision float; the type of plain real literals.
    Double(f64),
    /// A decimal number (`m` suffix).
    Decimal(Decimal),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Int16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Single(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Self::Decimal(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Returns the type tag of this value.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::value::{Value, ValueType};
    ///
    /// assert_eq!(Value::from(3i64).value_type(), ValueType::Int64);
    /// assert_eq!(Value::Null.value_type(), ValueType::Null);
    /// ```
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Null => ValueType::Null,
            Self::Boolean(_) => ValueType::Boolean,
            Self::String(_) => ValueType::String,
            Self::Byte(_) => ValueType::Byte,
            Self::Int16(_) => ValueType::Int16,
            Self::Int32(_) => ValueType::Int32,
            Self::Int64(_) => ValueType::Int64,
            Self::Single(_) => ValueType::Single,
            Self::Double(_) => ValueType::Double,
            Self::Decimal(_) => ValueType::Decimal,
        }
    }

    /// `true` if this is the `null` value.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Converts the value to `bool`, or returns an error naming `operator` if
    /// it is not boolean.
    ///
    /// # Parameters
    /// - `operator`: Symbol of the operator that needs the boolean, used for
    ///   error reporting.
    ///
    /// # Returns
    /// - `Ok(bool)`: The boolean value.
    /// - `Err(EvaluationError::NullOperand)`: If the value is `null`.
    /// - `Err(EvaluationError::UnsupportedOperand)`: For any other type.
    pub const fn as_bool(&self, operator: &'static str) -> EvalResult<bool> {
        match self {
            Self::Boolean(b) => Ok(*b),
            Self::Null => Err(EvaluationError::NullOperand { operator }),
            other => Err(EvaluationError::UnsupportedOperand { operator,
                                                               operand: other.value_type() }),
        }
    }

    /// Returns the value of an integral variant widened to `i64`.
    ///
    /// Returns `None` for every non-integral value, including floats that
    /// happen to hold whole numbers.
    #[must_use]
    pub fn integral_value(&self) -> Option<i64> {
        match self {
            Self::Byte(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    /// Writes the value in the literal syntax of the expression language.
    ///
    /// Used when rendering a node tree back to text. Suffixes select the same
    /// numeric type the parser would, and strings are re-escaped.
    pub fn write_literal(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => {
                f.write_str("\"")?;
                for c in s.chars() {
                    match c {
                        '"' => f.write_str("\\\"")?,
                        '\\' => f.write_str("\\\\")?,
                        '\0' => f.write_str("\\0")?,
                        '\u{7}' => f.write_str("\\a")?,
                        '\u{8}' => f.write_str("\\b")?,
                        '\u{c}' => f.write_str("\\f")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        '\t' => f.write_str("\\t")?,
                        '\u{b}' => f.write_str("\\v")?,
                        c => write!(f, "{c}")?,
                    }
                }
                f.write_str("\"")
            },
            Self::Byte(v) => write!(f, "(byte) {v}"),
            Self::Int16(v) => write!(f, "(short) {v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}L"),
            Self::Single(v) => write!(f, "{v}f"),
            Self::Double(v) => write!(f, "{v}d"),
            Self::Decimal(v) => write!(f, "{v}m"),
        }
    }
}

/// The canonical text of a value.
///
/// This is what string concatenation appends for a non-string operand: plain
/// numbers without suffixes, `true`/`false`, and `null` for the null value.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
            Self::Byte(v) => write!(f, "{v}"),
            Self::Int16(v) => write!(f, "{v}"),
            Self::Int32(v) => write!(f, "{v}"),
            Self::Int64(v) => write!(f, "{v}"),
            Self::Single(v) => write!(f, "{v}"),
            Self::Double(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{v}"),
        }
    }
}
