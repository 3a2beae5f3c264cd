/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions, including
/// arithmetic, string concatenation, comparisons, bitwise and logical
/// operators.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements negation, logical NOT and bitwise complement.
pub mod unary;

/// Cast evaluation.
///
/// Converts values between the numeric types and checks identity casts for
/// booleans and strings.
pub mod cast;

/// Core evaluation logic and context management.
///
/// Contains the evaluation context holding the substitution values, and the
/// tree walk that dispatches each node kind.
pub mod core;
