use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::{
            Promoted, Value,
            promotion::ArithmeticOp,
        },
    },
};

impl Context {
    /// Evaluates `+`.
    ///
    /// If either operand is a string the other one is converted to its
    /// canonical text and the two are concatenated; otherwise this is numeric
    /// addition.
    ///
    /// # Example
    /// ```
    /// use exprbind::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let text = Context::eval_add(&Value::from("n = "), &Value::Int64(5)).unwrap();
    /// assert_eq!(text, Value::from("n = 5"));
    /// ```
    pub fn eval_add(left: &Value, right: &Value) -> EvalResult<Value> {
        match (left, right) {
            (Value::String(_), _) | (_, Value::String(_)) => {
                Ok(Value::String(format!("{left}{right}")))
            },
            _ => Self::eval_arithmetic(ArithmeticOp::Add, BinaryOperator::Add, left, right),
        }
    }

    /// Evaluates a numeric arithmetic operator.
    ///
    /// Both operands are promoted to their common type, which is also the
    /// type of the result. Integral results wrap on overflow.
    ///
    /// # Parameters
    /// - `arithmetic`: The primitive to apply.
    /// - `op`: The source operator, for error reporting.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    ///
    /// # Errors
    /// - `UnsupportedOperands` when either side is not numeric, or a decimal
    ///   meets a float.
    /// - `DivideByZero` for integral or decimal division by zero.
    /// - `Overflow` when a decimal result is out of range.
    pub fn eval_arithmetic(arithmetic: ArithmeticOp,
                           op: BinaryOperator,
                           left: &Value,
                           right: &Value)
                           -> EvalResult<Value> {
        Promoted::promote(left, right).ok_or_else(|| unsupported(op, left, right))?
                                      .arithmetic(arithmetic, op.symbol())
    }
}
