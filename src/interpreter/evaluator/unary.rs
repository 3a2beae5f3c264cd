use crate::{
    ast::UnaryOperator,
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: signed numbers (`Int16`, `Int32`, `Int64`, `Single`,
    ///   `Double`, `Decimal`). Integral negation wraps, so negating the
    ///   minimum value yields it again.
    /// - `Not`: booleans.
    /// - `Complement`: integral values including `Byte`.
    ///
    /// The result keeps the operand's type.
    ///
    /// # Errors
    /// - `NullOperand` if the operand is `null`.
    /// - `UnsupportedOperand` for any other type the operator does not accept.
    ///
    /// # Example
    /// ```
    /// use exprbind::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int32(5)).unwrap();
    /// assert_eq!(v, Value::Int32(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Complement, &Value::Byte(0)).unwrap();
    /// assert_eq!(v, Value::Byte(255));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::Byte(1)).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        let operator = op.symbol();
        let unsupported = || EvaluationError::UnsupportedOperand { operator,
                                                                   operand: value.value_type() };

        if value.is_null() {
            return Err(EvaluationError::NullOperand { operator });
        }

        match op {
            UnaryOperator::Negate => match value {
                Value::Int16(v) => Ok(Value::Int16(v.wrapping_neg())),
                Value::Int32(v) => Ok(Value::Int32(v.wrapping_neg())),
                Value::Int64(v) => Ok(Value::Int64(v.wrapping_neg())),
                Value::Single(v) => Ok(Value::Single(-v)),
                Value::Double(v) => Ok(Value::Double(-v)),
                Value::Decimal(v) => Ok(Value::Decimal(-*v)),
                _ => Err(unsupported()),
            },
            UnaryOperator::Not => Ok(Value::Boolean(!value.as_bool(operator)?)),
            UnaryOperator::Complement => match value {
                Value::Byte(v) => Ok(Value::Byte(!v)),
                Value::Int16(v) => Ok(Value::Int16(!v)),
                Value::Int32(v) => Ok(Value::Int32(!v)),
                Value::Int64(v) => Ok(Value::Int64(!v)),
                _ => Err(unsupported()),
            },
        }
    }
}
