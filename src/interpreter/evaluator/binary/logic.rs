use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::{Promoted, Value, promotion::BitwiseOp},
    },
};

impl Context {
    /// Evaluates `&`, `|` and `^`.
    ///
    /// Two booleans give a boolean (both sides are always evaluated). Two
    /// integral values are promoted and combined bitwise.
    ///
    /// # Errors
    /// `UnsupportedOperands` for floats, decimals, strings or a mix of a
    /// boolean and a number.
    ///
    /// # Example
    /// ```
    /// use exprbind::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::{Value, promotion::BitwiseOp}},
    /// };
    ///
    /// let v = Context::eval_logic(BitwiseOp::Xor,
    ///                             BinaryOperator::LogicalXor,
    ///                             &Value::Int32(0b1100),
    ///                             &Value::Byte(0b1010));
    /// assert_eq!(v, Ok(Value::Int32(0b0110)));
    /// ```
    pub fn eval_logic(bitwise: BitwiseOp,
                      op: BinaryOperator,
                      left: &Value,
                      right: &Value)
                      -> EvalResult<Value> {
        if let (Value::Boolean(a), Value::Boolean(b)) = (left, right) {
            return Ok(Value::Boolean(match bitwise {
                                         BitwiseOp::And => a & b,
                                         BitwiseOp::Or => a | b,
                                         BitwiseOp::Xor => a ^ b,
                                     }));
        }

        Promoted::promote(left, right).and_then(|pair| pair.bitwise(bitwise))
                                      .ok_or_else(|| unsupported(op, left, right))
    }
}
