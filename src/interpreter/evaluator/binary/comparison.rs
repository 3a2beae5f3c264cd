use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unsupported,
            core::{Context, EvalResult},
        },
        value::{Promoted, Value},
    },
};

impl Context {
    /// Evaluates `==` and `!=`.
    ///
    /// - `null` equals only `null`, and may be compared with anything.
    /// - Booleans compare with booleans, strings with strings (ordinal).
    /// - Numbers compare after promotion, so `(byte) 3 == 3L` is `true`.
    ///
    /// # Errors
    /// `UnsupportedOperands` for any other pairing, e.g. a string and a
    /// number, or a decimal and a float.
    pub fn eval_equality(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let equal = match (left, right) {
            (Value::Null, other) | (other, Value::Null) => other.is_null(),
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            _ => {
                let promoted =
                    Promoted::promote(left, right).ok_or_else(|| unsupported(op, left, right))?;
                promoted.compare() == Some(Ordering::Equal)
            },
        };

        Ok(Value::Boolean(match op {
                              BinaryOperator::NotEqual => !equal,
                              _ => equal,
                          }))
    }

    /// Evaluates `<`, `<=`, `>` and `>=` on numeric operands.
    ///
    /// Comparisons involving `NaN` are `false`.
    ///
    /// # Errors
    /// `UnsupportedOperands` when either side is not numeric.
    pub fn eval_relational(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        let ordering = Promoted::promote(left, right).ok_or_else(|| unsupported(op, left, right))?
                                                     .compare();

        let result = ordering.is_some_and(|ordering| match op {
                                 BinaryOperator::Less => ordering.is_lt(),
                                 BinaryOperator::LessEqual => ordering.is_le(),
                                 BinaryOperator::Greater => ordering.is_gt(),
                                 _ => ordering.is_ge(),
                             });
        Ok(Value::Boolean(result))
    }
}
