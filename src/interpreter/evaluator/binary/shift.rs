use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::Value,
    },
};

impl Context {
    /// Evaluates `<<` and `>>`.
    ///
    /// The result has the type of the left operand; the right operand only
    /// supplies the shift count. The count is masked to the bit width of the
    /// left type, so `1 << 33` is `2`. `>>` is arithmetic for signed types.
    ///
    /// # Errors
    /// `UnsupportedOperands` unless both operands are integral.
    ///
    /// # Example
    /// ```
    /// use exprbind::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let v = Context::eval_shift(BinaryOperator::ShiftRight, &Value::Int16(-8), &Value::Int64(1));
    /// assert_eq!(v, Ok(Value::Int16(-4)));
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn eval_shift(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let count = right.integral_value()
                         .ok_or_else(|| unsupported(op, left, right))? as u32;
        let left_shift = op == BinaryOperator::ShiftLeft;

        macro_rules! shift {
            ($variant:ident, $v:expr) => {
                Ok(Value::$variant(if left_shift {
                                       $v.wrapping_shl(count)
                                   } else {
                                       $v.wrapping_shr(count)
                                   }))
            };
        }

        match left {
            Value::Byte(v) => shift!(Byte, v),
            Value::Int16(v) => shift!(Int16, v),
            Value::Int32(v) => shift!(Int32, v),
            Value::Int64(v) => shift!(Int64, v),
            _ => Err(unsupported(op, left, right)),
        }
    }
}
