/// Expression parsing for binary operators.
///
/// Implements one function per binary precedence level, from conditional OR
/// down to multiplication.
pub mod binary;
/// Expression parsing for unary operators, casts and operands.
///
/// Handles prefix operators, the boolean and `null` keywords, literals,
/// parenthesised groups, casts and `{N}` variable references.
pub mod unary;
/// Core parsing entry points.
///
/// Provides the top-level expression parser and the function that parses a
/// complete input and rejects anything left over.
pub mod core;
/// Numeric literal parsing.
///
/// Interprets the raw lexeme of a number token as an `Int32`, `Int64`,
/// `Single`, `Double` or `Decimal` value.
pub mod number;
/// Parsing utilities.
///
/// The peekable token stream shared by every parsing function, plus helpers
/// for matching and requiring symbols.
pub mod utils;
