use std::{str::FromStr, thread};

use exprbind::{
    CompiledExpression, Context, Value,
    ast::BinaryOperator,
    compile,
    error::EvaluationError,
    interpreter::value::ValueType,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;

fn eval(src: &str) -> Value {
    eval_with(src, Context::empty())
}

fn eval_with(src: &str, context: &Context) -> Value {
    compile(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"))
                .evaluate(context)
                .unwrap_or_else(|e| panic!("Evaluating {src:?} failed: {e}"))
}

fn eval_error(src: &str) -> EvaluationError {
    eval_error_with(src, Context::empty())
}

fn eval_error_with(src: &str, context: &Context) -> EvaluationError {
    match compile(src).unwrap_or_else(|e| panic!("Parsing {src:?} failed: {e}"))
                      .evaluate(context)
    {
        Ok(value) => panic!("Evaluating {src:?} succeeded with {value:?}"),
        Err(e) => e,
    }
}

fn decimal(s: &str) -> Value {
    Value::Decimal(Decimal::from_str(s).unwrap())
}

fn unsupported(operator: &'static str, left: ValueType, right: ValueType) -> EvaluationError {
    EvaluationError::UnsupportedOperands { operator, left, right }
}

#[test]
fn numeric_promotion() {
    assert_eq!(eval("(byte) 200 + (byte) 100"), Value::Byte(44));
    assert_eq!(eval("(byte) 3 + (short) 4"), Value::Int16(7));
    assert_eq!(eval("(short) 3 * 4"), Value::Int32(12));
    assert_eq!(eval("3 - 4L"), Value::Int64(-1));
    assert_eq!(eval("1L + 1.5f"), Value::Single(2.5));
    assert_eq!(eval("1.5f + 1d"), Value::Double(2.5));
    assert_eq!(eval("1.5m + 1"), decimal("2.5"));
    assert_eq!(eval("(byte) 2 * 1.25m"), decimal("2.5"));
}

#[test]
fn decimals_do_not_mix_with_floats() {
    assert_eq!(eval_error("1.5m + 1d"),
               unsupported("+", ValueType::Decimal, ValueType::Double));
    assert_eq!(eval_error("1f < 2m"), unsupported("<", ValueType::Single, ValueType::Decimal));
    assert_eq!(eval_error("2.5m == 2.5"),
               unsupported("==", ValueType::Decimal, ValueType::Double));
}

#[test]
fn integral_arithmetic_wraps() {
    assert_eq!(eval("2147483647 + 1"), Value::Int32(i32::MIN));
    assert_eq!(eval("9223372036854775807L + 1"), Value::Int64(i64::MIN));
    assert_eq!(eval("(-2147483647 - 1) / -1"), Value::Int32(i32::MIN));
    assert_eq!(eval("(short) 32767 * (short) 2"), Value::Int16(-2));
}

#[test]
fn integral_division_truncates() {
    assert_eq!(eval("-7 / 2"), Value::Int32(-3));
    assert_eq!(eval("-7 % 2"), Value::Int32(-1));
    assert_eq!(eval("7.5m / 2"), decimal("3.75"));
}

#[test]
fn division_by_zero() {
    assert_eq!(eval_error("1 / 0"), EvaluationError::DivideByZero);
    assert_eq!(eval_error("1L % 0"), EvaluationError::DivideByZero);
    assert_eq!(eval_error("1m / 0"), EvaluationError::DivideByZero);
    assert_eq!(eval_error("(byte) 1 / (byte) 0"), EvaluationError::DivideByZero);
    assert_eq!(eval("1d / 0"), Value::Double(f64::INFINITY));
    assert_eq!(eval("-1f / 0"), Value::Single(f32::NEG_INFINITY));

    let Value::Double(nan) = eval("0d / 0") else {
        panic!("0d / 0 is not a double");
    };
    assert!(nan.is_nan());
}

#[test]
fn decimal_overflow() {
    assert_eq!(eval_error("79228162514264337593543950335m * 2"),
               EvaluationError::Overflow { operator: "*" });
    assert_eq!(eval_error("79228162514264337593543950335m + 1").to_string(),
               "arithmetic overflow in '+'");
}

#[test]
fn string_concatenation() {
    assert_eq!(eval(r#""x" + 1.5"#), Value::from("x1.5"));
    assert_eq!(eval(r#"1 + "x""#), Value::from("1x"));
    assert_eq!(eval(r#""a" + true"#), Value::from("atrue"));
    assert_eq!(eval(r#""v" + 2.50m"#), Value::from("v2.50"));
    assert_eq!(eval(r#""" + (byte) 7 + 1"#), Value::from("71"));
    assert_eq!(eval(r#"1 + 2 + "3""#), Value::from("33"));
    assert_eq!(eval_error(r#""n" + null"#), EvaluationError::NullOperand { operator: "+" });
    assert_eq!(eval_error(r#""n" - 1"#), unsupported("-", ValueType::String, ValueType::Int32));
}

#[test]
fn equality() {
    assert_eq!(eval("null == null"), Value::Boolean(true));
    assert_eq!(eval("null == 1"), Value::Boolean(false));
    assert_eq!(eval(r#""a" != null"#), Value::Boolean(true));
    assert_eq!(eval(r#""a" == "a""#), Value::Boolean(true));
    assert_eq!(eval(r#""a" == "A""#), Value::Boolean(false));
    assert_eq!(eval("true != false"), Value::Boolean(true));
    assert_eq!(eval("1 == 1.0"), Value::Boolean(true));
    assert_eq!(eval("(byte) 3 == 3L"), Value::Boolean(true));
    assert_eq!(eval("2.5m == 2.50m"), Value::Boolean(true));

    assert_eq!(eval_error(r#""1" == 1"#), unsupported("==", ValueType::String, ValueType::Int32));
    assert_eq!(eval_error("true == 1"), unsupported("==", ValueType::Boolean, ValueType::Int32));
}

#[test]
fn relational() {
    assert_eq!(eval("1 < 2"), Value::Boolean(true));
    assert_eq!(eval("2 <= 2L"), Value::Boolean(true));
    assert_eq!(eval("(byte) 255 > -1"), Value::Boolean(true));
    assert_eq!(eval("1.5m >= 2"), Value::Boolean(false));
    assert_eq!(eval_error(r#""a" < "b""#), unsupported("<", ValueType::String, ValueType::String));
    assert_eq!(eval_error("null < 1"), EvaluationError::NullOperand { operator: "<" });
}

#[test]
fn nan_compares_false() {
    assert_eq!(eval("0d / 0 == 0d / 0"), Value::Boolean(false));
    assert_eq!(eval("0d / 0 != 0d / 0"), Value::Boolean(true));
    assert_eq!(eval("0d / 0 < 1"), Value::Boolean(false));
    assert_eq!(eval("0d / 0 >= 1"), Value::Boolean(false));
}

#[test]
fn conditional_operators_short_circuit() {
    assert_eq!(eval("false && {0}"), Value::Boolean(false));
    assert_eq!(eval("true || {0}"), Value::Boolean(true));
    assert_eq!(eval("false && 1"), Value::Boolean(false));
    assert_eq!(eval_error("true && {0}"),
               EvaluationError::VariableIndexOutOfRange { index: 0,
                                                          count: 0, });
    assert_eq!(eval_error("true && 1"),
               EvaluationError::UnsupportedOperand { operator: "&&",
                                                     operand:  ValueType::Int32, });
    assert_eq!(eval_error("1 || true"),
               EvaluationError::UnsupportedOperand { operator: "||",
                                                     operand:  ValueType::Int32, });
    assert_eq!(eval_error("null || true"), EvaluationError::NullOperand { operator: "||" });
}

#[test]
fn logical_operators() {
    assert_eq!(eval("true & false"), Value::Boolean(false));
    assert_eq!(eval("true | false"), Value::Boolean(true));
    assert_eq!(eval("true ^ true"), Value::Boolean(false));
    assert_eq!(eval("6 & 3"), Value::Int32(2));
    assert_eq!(eval("6 | 3L"), Value::Int64(7));
    assert_eq!(eval("(byte) 12 ^ (byte) 10"), Value::Byte(6));
    assert_eq!(eval_error("false & {0}"),
               EvaluationError::VariableIndexOutOfRange { index: 0,
                                                          count: 0, });
    assert_eq!(eval_error("1.5 & 1"), unsupported("&", ValueType::Double, ValueType::Int32));
    assert_eq!(eval_error("true | 1"), unsupported("|", ValueType::Boolean, ValueType::Int32));
}

#[test]
fn shifts() {
    assert_eq!(eval("1 << 33"), Value::Int32(2));
    assert_eq!(eval("1L << 33"), Value::Int64(8_589_934_592));
    assert_eq!(eval("(byte) 1 << 9"), Value::Byte(2));
    assert_eq!(eval("-8 >> 1"), Value::Int32(-4));
    assert_eq!(eval("(short) -8 >> 1L"), Value::Int16(-4));
    assert_eq!(eval("1 << (byte) 4"), Value::Int32(16));
    assert_eq!(eval_error("1.5 << 1"), unsupported("<<", ValueType::Double, ValueType::Int32));
    assert_eq!(eval_error("1 >> 1m"), unsupported(">>", ValueType::Int32, ValueType::Decimal));
}

#[test]
fn unary_operators() {
    assert_eq!(eval("-(-2147483647 - 1)"), Value::Int32(i32::MIN));
    assert_eq!(eval("-(short) 5"), Value::Int16(-5));
    assert_eq!(eval("-2.5m"), decimal("-2.5"));
    assert_eq!(eval("-1.5f"), Value::Single(-1.5));
    assert_eq!(eval("~(byte) 0"), Value::Byte(255));
    assert_eq!(eval("~0L"), Value::Int64(-1));
    assert_eq!(eval("!(1 == 2)"), Value::Boolean(true));

    assert_eq!(eval_error("-(byte) 1"),
               EvaluationError::UnsupportedOperand { operator: "-",
                                                     operand:  ValueType::Byte, });
    assert_eq!(eval_error("~1.5"),
               EvaluationError::UnsupportedOperand { operator: "~",
                                                     operand:  ValueType::Double, });
    assert_eq!(eval_error("!1"),
               EvaluationError::UnsupportedOperand { operator: "!",
                                                     operand:  ValueType::Int32, });
    assert_eq!(eval_error(r#"-"a""#).to_string(), "unsupported operand type for '-': String");
    assert_eq!(eval_error("-null"), EvaluationError::NullOperand { operator: "-" });
}

#[test]
fn integral_casts_keep_low_bits() {
    assert_eq!(eval("(byte) 300"), Value::Byte(44));
    assert_eq!(eval("(short) 70000"), Value::Int16(4464));
    assert_eq!(eval("(int) 3000000000L"), Value::Int32(-1_294_967_296));
    assert_eq!(eval("(long) -1"), Value::Int64(-1));
    assert_eq!(eval("(byte) -1"), Value::Byte(255));
}

#[test]
fn float_casts_truncate_and_saturate() {
    assert_eq!(eval("(int) -2.9"), Value::Int32(-2));
    assert_eq!(eval("(long) 7.9f"), Value::Int64(7));
    assert_eq!(eval("(byte) -1.5"), Value::Byte(0));
    assert_eq!(eval("(int) 1e20"), Value::Int32(i32::MAX));
    assert_eq!(eval("(int) (0d / 0)"), Value::Int32(0));
    assert_eq!(eval("(double) 3"), Value::Double(3.0));
    assert_eq!(eval("(float) 0.5"), Value::Single(0.5));
    assert_eq!(eval("(double) 0.5f"), Value::Double(0.5));
}

#[test]
fn decimal_casts() {
    assert_eq!(eval("(long) 2.5m"), Value::Int64(2));
    assert_eq!(eval("(int) -2.5m"), Value::Int32(-2));
    assert_eq!(eval("(decimal) 2.5"), decimal("2.5"));
    assert_eq!(eval("(decimal) 0.5f"), decimal("0.5"));
    assert_eq!(eval("(decimal) 7L"), decimal("7"));
    assert_eq!(eval("(float) 1.5m"), Value::Single(1.5));
    assert_eq!(eval("(double) 1.5m"), Value::Double(1.5));

    assert_eq!(eval_error("(byte) 256m"), EvaluationError::Overflow { operator: "byte" });
    assert_eq!(eval_error("(byte) -1m"), EvaluationError::Overflow { operator: "byte" });
    assert_eq!(eval_error("(decimal) 1e30"), EvaluationError::Overflow { operator: "decimal" });
    assert_eq!(eval_error("(decimal) (0d / 0)"),
               EvaluationError::Overflow { operator: "decimal" });
}

#[test]
fn boolean_string_and_null_casts() {
    assert_eq!(eval("(bool) true"), Value::Boolean(true));
    assert_eq!(eval(r#"(String) "x""#), Value::from("x"));
    assert_eq!(eval_error("(bool) 1"),
               EvaluationError::InvalidCast { from: ValueType::Int32,
                                              to:   ValueType::Boolean, });
    assert_eq!(eval_error("(string) 1"),
               EvaluationError::InvalidCast { from: ValueType::Int32,
                                              to:   ValueType::String, });
    assert_eq!(eval_error(r#"(int) "3""#),
               EvaluationError::InvalidCast { from: ValueType::String,
                                              to:   ValueType::Int32, });
    assert_eq!(eval_error("(int) null"),
               EvaluationError::InvalidCast { from: ValueType::Null,
                                              to:   ValueType::Int32, });
}

#[test]
fn non_integral_sources_reject_boolean_and_string_targets() {
    for (src, from, to) in [("(bool) 1.5", ValueType::Double, ValueType::Boolean),
                            ("(string) 2.5f", ValueType::Single, ValueType::String),
                            ("(bool) 2m", ValueType::Decimal, ValueType::Boolean),
                            ("(string) 3L", ValueType::Int64, ValueType::String)]
    {
        assert_eq!(eval_error(src), EvaluationError::InvalidCast { from, to }, "while evaluating {src}");
    }
    assert_eq!(eval("(long) (byte) 200"), Value::Int64(200));
    assert_eq!(eval("(double) 7L"), Value::Double(7.0));
}

#[test]
fn casts_check_substituted_values() {
    let expression = compile("(int) {0}").unwrap();

    assert_eq!(expression.evaluate(&Context::single(2.75)), Ok(Value::Int32(2)));
    assert_eq!(expression.evaluate(&Context::single("2")),
               Err(EvaluationError::InvalidCast { from: ValueType::String,
                                                  to:   ValueType::Int32, }));
    assert_eq!(expression.evaluate(&Context::single(None::<i32>)),
               Err(EvaluationError::InvalidCast { from: ValueType::Null,
                                                  to:   ValueType::Int32, }));
}

#[test]
fn variables() {
    let context: Context = [Value::Int32(1), Value::from("two"), Value::Null].into_iter()
                                                                            .collect();

    assert_eq!(eval_with("{0}", &context), Value::Int32(1));
    assert_eq!(eval_with(r#"{1} + {0}"#, &context), Value::from("two1"));
    assert_eq!(eval_with("{2} == null", &context), Value::Boolean(true));
    assert_eq!(eval_error_with("{3}", &context),
               EvaluationError::VariableIndexOutOfRange { index: 3,
                                                          count: 3, });
    assert_eq!(eval_error_with("{1} + {3}", &context).to_string(),
               "variable index 3 out of range (3 values supplied)");
}

#[test]
fn contexts() {
    let context = Context::from(vec![Value::Boolean(true), Value::Int64(2)]);
    assert_eq!(context.len(), 2);
    assert!(!context.is_empty());
    assert_eq!(context.get(1), Ok(&Value::Int64(2)));
    assert_eq!(context.get(2),
               Err(EvaluationError::VariableIndexOutOfRange { index: 2,
                                                              count: 2, }));

    assert!(Context::empty().is_empty());
    assert_eq!(Context::default(), *Context::empty());
    assert_eq!(Context::single(7u8).values(), &[Value::Byte(7)]);
}

#[test]
fn canonical_text() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::Boolean(false).to_string(), "false");
    assert_eq!(Value::Double(320_001.0).to_string(), "320001");
    assert_eq!(Value::Single(0.25).to_string(), "0.25");
    assert_eq!(decimal("1.50").to_string(), "1.50");
    assert_eq!(Value::Byte(255).to_string(), "255");
}

#[test]
fn compiled_expressions_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CompiledExpression>();
    assert_send_sync::<Context>();
    assert_send_sync::<Value>();

    let expression = compile("{0} * {0} + 1").unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> =
            (0..8_i32).map(|i| {
                      let expression = &expression;
                      scope.spawn(move || expression.evaluate(&Context::single(i)))
                  })
                  .collect();

        for (i, handle) in (0..8).zip(handles) {
            assert_eq!(handle.join().unwrap(), Ok(Value::Int32(i * i + 1)));
        }
    });
}

#[test]
fn eager_conditional_operators() {
    let (t, f) = (Value::Boolean(true), Value::Boolean(false));

    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalAnd, &t, &f), Ok(f.clone()));
    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalAnd, &t, &t), Ok(t.clone()));
    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalOr, &f, &t), Ok(t.clone()));
    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalOr, &f, &f), Ok(f.clone()));

    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalAnd, &t, &Value::Int32(1)),
               Err(EvaluationError::UnsupportedOperand { operator: "&&",
                                                         operand:  ValueType::Int32, }));
    assert_eq!(Context::eval_binary(BinaryOperator::ConditionalOr, &Value::Null, &t),
               Err(EvaluationError::NullOperand { operator: "||" }));
}

#[test]
fn only_equality_accepts_null() {
    assert_eq!(Context::eval_binary(BinaryOperator::Equal, &Value::Null, &Value::Null),
               Ok(Value::Boolean(true)));
    assert_eq!(Context::eval_binary(BinaryOperator::NotEqual, &Value::Null, &Value::Int32(1)),
               Ok(Value::Boolean(true)));
    assert_eq!(Context::eval_binary(BinaryOperator::Less, &Value::Int32(1), &Value::Null),
               Err(EvaluationError::NullOperand { operator: "<" }));
}
