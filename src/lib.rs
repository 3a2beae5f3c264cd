//! # exprbind
//!
//! exprbind is a small, typed expression language for data-binding
//! converters, written in Rust. An expression such as `{0} * 100 / {1}` is
//! compiled once and then evaluated against different substitution values,
//! with C-like arithmetic, logical, relational, bitwise and cast semantics.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of compiled expressions.
///
/// This module declares the `Node` enum and the operator enums that represent
/// a parsed expression as a tree. The tree is built by the parser and walked
/// by the evaluator.
///
/// # Responsibilities
/// - Defines node kinds for literals, variables, operators and casts.
/// - Lists binary operators in precedence order.
/// - Renders trees back to fully parenthesised text.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating expressions. Each error carries structured details, and its
/// `Display` implementation produces the user facing message.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches source positions to compile-time errors.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The compiled, reusable form of an expression.
pub mod expression;
/// Orchestrates lexing, parsing, evaluation and the value model.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for checked numeric conversion.
pub mod util;

pub use error::Error;
pub use expression::CompiledExpression;
pub use interpreter::{evaluator::core::Context, value::Value};

use crate::error::ParseError;

/// Compiles an expression for repeated evaluation.
///
/// # Errors
/// Returns the first lexical or syntax error in `source`.
///
/// # Examples
/// ```
/// use exprbind::{Context, Value, compile};
///
/// let expression = compile("1 + (8/3d) * (50 >> (3 - 1)) * 1e4").unwrap();
/// assert_eq!(expression.evaluate(Context::empty()), Ok(Value::Double(320001.0)));
///
/// let error = compile("(fubar) 3").unwrap_err();
/// assert!(error.to_string().contains("cannot cast to type 'fubar'"));
/// ```
pub fn compile(source: &str) -> Result<CompiledExpression, ParseError> {
    CompiledExpression::compile(source)
}

/// Compiles and evaluates an expression in one step.
///
/// Prefer [`compile`] when the same expression is evaluated more than once.
///
/// # Errors
/// Returns [`Error::Parse`] if the expression does not compile, or
/// [`Error::Evaluation`] if evaluating it fails.
///
/// # Examples
/// ```
/// use exprbind::{Context, Value, evaluate};
///
/// let context = Context::new(vec![Value::from("abc")]);
/// let result = evaluate(r#""x = " + {0}"#, &context);
/// assert_eq!(result, Ok(Value::from("x = abc")));
///
/// // Integral division by zero is an evaluation error.
/// assert!(evaluate("1 / 0", Context::empty()).is_err());
/// ```
pub fn evaluate(source: &str, context: &Context) -> Result<Value, Error> {
    Ok(compile(source)?.evaluate(context)?)
}
