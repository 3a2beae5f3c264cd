/// The evaluator module executes node trees and computes results.
///
/// The evaluator walks a compiled tree against an evaluation context holding
/// the `{N}` substitution values, applying numeric promotion, string
/// concatenation, comparisons, bitwise logic and casts.
///
/// # Responsibilities
/// - Evaluates every node kind, short-circuiting `&&` and `||`.
/// - Resolves variable references against the context.
/// - Reports evaluation errors such as division by zero or invalid casts.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw source text and produces a stream of symbol, word,
/// number and string tokens, each tagged with its byte offset. This is the
/// first stage of compilation.
///
/// # Responsibilities
/// - Classifies tokens by their first character.
/// - Decodes escape sequences in string literals.
/// - Reports lexical errors for malformed input.
pub mod lexer;
/// The parser module builds the node tree from tokens.
///
/// The parser pulls tokens from the lexer one at a time and constructs a
/// [`Node`](crate::ast::Node) tree by recursive descent over twelve
/// precedence levels.
///
/// # Responsibilities
/// - Converts tokens into nodes (operators, literals, casts, variables).
/// - Interprets numeric literals and cast type names.
/// - Validates syntax, reporting errors with their source position.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value universe of the language: `null`,
/// booleans, strings, four integral widths, two float widths and decimals.
/// It also implements numeric promotion between them.
///
/// # Responsibilities
/// - Defines the `Value` enum and its type tags.
/// - Selects the common type of two numeric operands.
/// - Provides the canonical text used by string concatenation.
pub mod value;
