/// Arithmetic and string concatenation.
///
/// Evaluates `+`, `-`, `*`, `/` and `%` on promoted numeric operands, and
/// `+` on strings.
pub mod arithmetic;

/// Comparison operators.
///
/// Evaluates equality (`==`, `!=`) and relational (`<`, `<=`, `>`, `>=`)
/// operators.
pub mod comparison;

/// Bitwise and boolean logic.
///
/// Evaluates `&`, `|` and `^` on integral or boolean operands, and the
/// non-short-circuit fallback of `&&` and `||`.
pub mod logic;

/// Shift operators.
///
/// Evaluates `<<` and `>>` on integral operands.
pub mod shift;

/// Binary operator dispatch.
///
/// Routes each operator to its family and rejects `null` operands.
pub mod core;
