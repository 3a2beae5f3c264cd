use crate::{
    ast::BinaryOperator,
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{
            Value,
            promotion::{ArithmeticOp, BitwiseOp},
        },
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Equality operators accept `null`; every other operator
    /// rejects it before looking at types.
    ///
    /// `&&` and `||` are normally short-circuited by [`Context::eval`]; when
    /// both values are already known they are combined here.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use exprbind::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &Value::Byte(3), &Value::Int16(4));
    /// assert_eq!(result, Ok(Value::Int16(7)));
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use BinaryOperator::{
            Add, ConditionalAnd, ConditionalOr, Divide, Equal, Greater, GreaterEqual, Less,
            LessEqual, LogicalAnd, LogicalOr, LogicalXor, Modulus, Multiply, NotEqual, ShiftLeft,
            ShiftRight, Subtract,
        };

        match op {
            Equal | NotEqual => Self::eval_equality(op, left, right),
            _ if left.is_null() || right.is_null() => {
                Err(EvaluationError::NullOperand { operator: op.symbol() })
            },

            Add => Self::eval_add(left, right),
            Subtract => Self::eval_arithmetic(ArithmeticOp::Sub, op, left, right),
            Multiply => Self::eval_arithmetic(ArithmeticOp::Mul, op, left, right),
            Divide => Self::eval_arithmetic(ArithmeticOp::Div, op, left, right),
            Modulus => Self::eval_arithmetic(ArithmeticOp::Rem, op, left, right),

            Less | LessEqual | Greater | GreaterEqual => Self::eval_relational(op, left, right),

            LogicalAnd => Self::eval_logic(BitwiseOp::And, op, left, right),
            LogicalOr => Self::eval_logic(BitwiseOp::Or, op, left, right),
            LogicalXor => Self::eval_logic(BitwiseOp::Xor, op, left, right),

            ConditionalAnd => {
                let symbol = op.symbol();
                Ok(Value::Boolean(left.as_bool(symbol)? && right.as_bool(symbol)?))
            },
            ConditionalOr => {
                let symbol = op.symbol();
                Ok(Value::Boolean(left.as_bool(symbol)? || right.as_bool(symbol)?))
            },

            ShiftLeft | ShiftRight => Self::eval_shift(op, left, right),
        }
    }
}

/// Builds the error for an operator applied to an unsupported pair of types.
pub(super) const fn unsupported(op: BinaryOperator, left: &Value, right: &Value) -> EvaluationError {
    EvaluationError::UnsupportedOperands { operator: op.symbol(),
                                           left:     left.value_type(),
                                           right:    right.value_type(), }
}
