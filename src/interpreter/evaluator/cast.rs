use rust_decimal::Decimal;

use crate::{
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{Value, ValueType},
    },
    util::num::{
        decimal_to_f32_checked, decimal_to_f64_checked, decimal_to_integral_checked,
        f32_to_decimal_checked, f64_to_decimal_checked,
    },
};

impl Context {
    /// Converts a value to `target`.
    ///
    /// - Casting to the value's own type returns it unchanged; this is the
    ///   only legal cast to or from `Boolean` and `String`.
    /// - Integral to integral keeps the low bits (`(byte) 300` is `44`).
    /// - Float to integral truncates toward zero and saturates at the bounds
    ///   of the target type; `NaN` becomes `0`.
    /// - Decimal to integral truncates toward zero and fails if the result
    ///   does not fit.
    ///
    /// The check happens at evaluation time because the operand's type may
    /// come from a substitution value.
    ///
    /// # Errors
    /// - `InvalidCast` for non-identity casts involving booleans, strings or
    ///   `null`.
    /// - `Overflow` when a conversion into or out of `Decimal` is out of
    ///   range.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::{
    ///     evaluator::core::Context,
    ///     value::{Value, ValueType},
    /// };
    ///
    /// assert_eq!(Context::eval_cast(ValueType::Byte, &Value::Int32(300)), Ok(Value::Byte(44)));
    /// assert_eq!(Context::eval_cast(ValueType::Int32, &Value::Double(-2.9)), Ok(Value::Int32(-2)));
    /// assert!(Context::eval_cast(ValueType::Int32, &Value::from("3")).is_err());
    /// ```
    pub fn eval_cast(target: ValueType, value: &Value) -> EvalResult<Value> {
        let source = value.value_type();
        if source == target {
            return Ok(value.clone());
        }

        let cast = match value {
            Value::Single(v) => Self::cast_float(target, f64::from(*v), Some(*v))?,
            Value::Double(v) => Self::cast_float(target, *v, None)?,
            Value::Decimal(v) => Self::cast_decimal(target, *v)?,
            other => other.integral_value()
                          .and_then(|v| Self::cast_integral(target, v)),
        };
        cast.ok_or(EvaluationError::InvalidCast { from: source,
                                                  to:   target, })
    }

    #[allow(clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss)]
    fn cast_integral(target: ValueType, v: i64) -> Option<Value> {
        match target {
            ValueType::Byte => Some(Value::Byte(v as u8)),
            ValueType::Int16 => Some(Value::Int16(v as i16)),
            ValueType::Int32 => Some(Value::Int32(v as i32)),
            ValueType::Int64 => Some(Value::Int64(v)),
            ValueType::Single => Some(Value::Single(v as f32)),
            ValueType::Double => Some(Value::Double(v as f64)),
            ValueType::Decimal => Some(Value::Decimal(Decimal::from(v))),
            ValueType::Null | ValueType::Boolean | ValueType::String => None,
        }
    }

    /// `single` is set when the source was an `f32`, so conversions to
    /// decimal start from the exact single precision value.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn cast_float(target: ValueType, v: f64, single: Option<f32>) -> EvalResult<Option<Value>> {
        let overflow = EvaluationError::Overflow { operator: target.cast_name() };

        Ok(Some(match target {
                    ValueType::Byte => Value::Byte(v as u8),
                    ValueType::Int16 => Value::Int16(v as i16),
                    ValueType::Int32 => Value::Int32(v as i32),
                    ValueType::Int64 => Value::Int64(v as i64),
                    ValueType::Single => Value::Single(v as f32),
                    ValueType::Double => Value::Double(v),
                    ValueType::Decimal => Value::Decimal(match single {
                                                             Some(s) => f32_to_decimal_checked(s, overflow)?,
                                                             None => f64_to_decimal_checked(v, overflow)?,
                                                         }),
                    ValueType::Null | ValueType::Boolean | ValueType::String => return Ok(None),
                }))
    }

    fn cast_decimal(target: ValueType, v: Decimal) -> EvalResult<Option<Value>> {
        let overflow = EvaluationError::Overflow { operator: target.cast_name() };

        Ok(Some(match target {
                    ValueType::Byte => Value::Byte(decimal_to_integral_checked(v, overflow)?),
                    ValueType::Int16 => Value::Int16(decimal_to_integral_checked(v, overflow)?),
                    ValueType::Int32 => Value::Int32(decimal_to_integral_checked(v, overflow)?),
                    ValueType::Int64 => Value::Int64(decimal_to_integral_checked(v, overflow)?),
                    ValueType::Single => Value::Single(decimal_to_f32_checked(v, overflow)?),
                    ValueType::Double => Value::Double(decimal_to_f64_checked(v, overflow)?),
                    ValueType::Decimal => Value::Decimal(v),
                    ValueType::Null | ValueType::Boolean | ValueType::String => return Ok(None),
                }))
    }
}
