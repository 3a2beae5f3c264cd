use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{Value, ValueType},
    },
};

/// A pair of numeric operands widened to their common type.
///
/// Built by [`Promoted::promote`]; every binary numeric operator matches on
/// this enum, so each width gets its own primitive implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Promoted {
    /// Both operands are bytes.
    Byte(u8, u8),
    /// Widened to 16-bit integers.
    Int16(i16, i16),
    /// Widened to 32-bit integers.
    Int32(i32, i32),
    /// Widened to 64-bit integers.
    Int64(i64, i64),
    /// Widened to single precision floats.
    Single(f32, f32),
    /// Widened to double precision floats.
    Double(f64, f64),
    /// Widened to decimals.
    Decimal(Decimal, Decimal),
}

/// The numeric operators a promoted pair supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
}

/// Bitwise operators on promoted integral pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitwiseOp {
    /// `&`
    And,
    /// `|`
    Or,
    /// `^`
    Xor,
}

/// Per-width arithmetic used by [`Promoted::arithmetic`].
///
/// Integral widths wrap on overflow; division and remainder by zero fail.
/// Floats follow IEEE. Decimals fail on overflow.
trait Arithmetic: Copy + PartialOrd {
    fn apply(self, op: ArithmeticOp, rhs: Self, symbol: &'static str) -> EvalResult<Self>;
}

macro_rules! integral_arithmetic {
    ($($ty:ty),*) => {$(
        impl Arithmetic for $ty {
            fn apply(self, op: ArithmeticOp, rhs: Self, _symbol: &'static str) -> EvalResult<Self> {
                match op {
                    ArithmeticOp::Add => Ok(self.wrapping_add(rhs)),
                    ArithmeticOp::Sub => Ok(self.wrapping_sub(rhs)),
                    ArithmeticOp::Mul => Ok(self.wrapping_mul(rhs)),
                    ArithmeticOp::Div if rhs == 0 => Err(EvaluationError::DivideByZero),
                    ArithmeticOp::Div => Ok(self.wrapping_div(rhs)),
                    ArithmeticOp::Rem if rhs == 0 => Err(EvaluationError::DivideByZero),
                    ArithmeticOp::Rem => Ok(self.wrapping_rem(rhs)),
                }
            }
        }
    )*};
}

macro_rules! floating_arithmetic {
    ($($ty:ty),*) => {$(
        impl Arithmetic for $ty {
            fn apply(self, op: ArithmeticOp, rhs: Self, _symbol: &'static str) -> EvalResult<Self> {
                Ok(match op {
                    ArithmeticOp::Add => self + rhs,
                    ArithmeticOp::Sub => self - rhs,
                    ArithmeticOp::Mul => self * rhs,
                    ArithmeticOp::Div => self / rhs,
                    ArithmeticOp::Rem => self % rhs,
                })
            }
        }
    )*};
}

integral_arithmetic!(u8, i16, i32, i64);
floating_arithmetic!(f32, f64);

impl Arithmetic for Decimal {
    fn apply(self, op: ArithmeticOp, rhs: Self, symbol: &'static str) -> EvalResult<Self> {
        if matches!(op, ArithmeticOp::Div | ArithmeticOp::Rem) && rhs.is_zero() {
            return Err(EvaluationError::DivideByZero);
        }
        let result = match op {
            ArithmeticOp::Add => self.checked_add(rhs),
            ArithmeticOp::Sub => self.checked_sub(rhs),
            ArithmeticOp::Mul => self.checked_mul(rhs),
            ArithmeticOp::Div => self.checked_div(rhs),
            ArithmeticOp::Rem => self.checked_rem(rhs),
        };
        result.ok_or(EvaluationError::Overflow { operator: symbol })
    }
}

fn bitwise<T>(op: BitwiseOp, a: T, b: T) -> T
    where T: std::ops::BitAnd<Output = T> + std::ops::BitOr<Output = T> + std::ops::BitXor<Output = T>
{
    match op {
        BitwiseOp::And => a & b,
        BitwiseOp::Or => a | b,
        BitwiseOp::Xor => a ^ b,
    }
}

impl Promoted {
    /// Widens two values to their common numeric type.
    ///
    /// Returns `None` when either value is not numeric or when a decimal is
    /// paired with a float.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::value::{Promoted, Value};
    ///
    /// let pair = Promoted::promote(&Value::Byte(7), &Value::Int64(-1));
    /// assert_eq!(pair, Some(Promoted::Int64(7, -1)));
    ///
    /// assert_eq!(Promoted::promote(&Value::Double(1.0), &Value::from(true)), None);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn promote(left: &Value, right: &Value) -> Option<Self> {
        let target = left.value_type().promote_with(right.value_type())?;

        // Widening only: the target rank is at least that of each operand, so
        // the integral `as` conversions below never truncate.
        Some(match target {
            ValueType::Byte => match (left, right) {
                (Value::Byte(a), Value::Byte(b)) => Self::Byte(*a, *b),
                _ => return None,
            },
            ValueType::Int16 => {
                Self::Int16(left.integral_value()? as i16, right.integral_value()? as i16)
            },
            ValueType::Int32 => {
                Self::Int32(left.integral_value()? as i32, right.integral_value()? as i32)
            },
            ValueType::Int64 => Self::Int64(left.integral_value()?, right.integral_value()?),
            ValueType::Single => Self::Single(widen_to_single(left)?, widen_to_single(right)?),
            ValueType::Double => Self::Double(widen_to_double(left)?, widen_to_double(right)?),
            ValueType::Decimal => {
                Self::Decimal(widen_to_decimal(left)?, widen_to_decimal(right)?)
            },
            ValueType::Null | ValueType::Boolean | ValueType::String => return None,
        })
    }

    /// Applies an arithmetic operator; the result keeps the promoted type.
    ///
    /// # Errors
    /// - `DivideByZero` for integral or decimal `/` and `%` by zero.
    /// - `Overflow` when a decimal result is out of range.
    pub fn arithmetic(self, op: ArithmeticOp, symbol: &'static str) -> EvalResult<Value> {
        Ok(match self {
               Self::Byte(a, b) => Value::Byte(a.apply(op, b, symbol)?),
               Self::Int16(a, b) => Value::Int16(a.apply(op, b, symbol)?),
               Self::Int32(a, b) => Value::Int32(a.apply(op, b, symbol)?),
               Self::Int64(a, b) => Value::Int64(a.apply(op, b, symbol)?),
               Self::Single(a, b) => Value::Single(a.apply(op, b, symbol)?),
               Self::Double(a, b) => Value::Double(a.apply(op, b, symbol)?),
               Self::Decimal(a, b) => Value::Decimal(a.apply(op, b, symbol)?),
           })
    }

    /// Compares the two operands.
    ///
    /// Returns `None` when the operands are unordered (a `NaN` is involved).
    #[must_use]
    pub fn compare(self) -> Option<Ordering> {
        match self {
            Self::Byte(a, b) => a.partial_cmp(&b),
            Self::Int16(a, b) => a.partial_cmp(&b),
            Self::Int32(a, b) => a.partial_cmp(&b),
            Self::Int64(a, b) => a.partial_cmp(&b),
            Self::Single(a, b) => a.partial_cmp(&b),
            Self::Double(a, b) => a.partial_cmp(&b),
            Self::Decimal(a, b) => a.partial_cmp(&b),
        }
    }

    /// Applies a bitwise operator, or returns `None` for non-integral pairs.
    #[must_use]
    pub fn bitwise(self, op: BitwiseOp) -> Option<Value> {
        match self {
            Self::Byte(a, b) => Some(Value::Byte(bitwise(op, a, b))),
            Self::Int16(a, b) => Some(Value::Int16(bitwise(op, a, b))),
            Self::Int32(a, b) => Some(Value::Int32(bitwise(op, a, b))),
            Self::Int64(a, b) => Some(Value::Int64(bitwise(op, a, b))),
            Self::Single(..) | Self::Double(..) | Self::Decimal(..) => None,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn widen_to_single(value: &Value) -> Option<f32> {
    match value {
        Value::Single(v) => Some(*v),
        other => other.integral_value().map(|v| v as f32),
    }
}

#[allow(clippy::cast_precision_loss)]
fn widen_to_double(value: &Value) -> Option<f64> {
    match value {
        Value::Double(v) => Some(*v),
        Value::Single(v) => Some(f64::from(*v)),
        other => other.integral_value().map(|v| v as f64),
    }
}

fn widen_to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(v) => Some(*v),
        other => other.integral_value().map(Decimal::from),
    }
}
