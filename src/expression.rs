use std::str::FromStr;

use crate::{
    ast::Node,
    error::{EvaluationError, ParseError},
    interpreter::{evaluator::core::Context, parser::core::parse_complete, value::Value},
};

/// A parsed expression, ready to be evaluated any number of times.
///
/// Compiling performs a single pass over the source text. The resulting tree
/// is immutable, so a `CompiledExpression` can be cached and shared between
/// threads; each evaluation only needs its own [`Context`].
///
/// # Example
/// ```
/// use exprbind::{CompiledExpression, interpreter::{evaluator::core::Context, value::Value}};
///
/// let visible: CompiledExpression = "{0} > 0 && {0} < 10".parse().unwrap();
///
/// assert_eq!(visible.evaluate(&Context::single(5)), Ok(Value::Boolean(true)));
/// assert_eq!(visible.evaluate(&Context::single(50)), Ok(Value::Boolean(false)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledExpression {
    source: String,
    root:   Node,
}

impl CompiledExpression {
    /// Parses `source` into a compiled expression.
    ///
    /// # Errors
    /// Returns the first lexical or syntax error; no partial tree is kept.
    pub fn compile(source: &str) -> Result<Self, ParseError> {
        match parse_complete(source) {
            Ok(root) => {
                tracing::debug!(source, tree = %root, "compiled expression");
                Ok(Self { source: source.to_owned(),
                          root })
            },
            Err(error) => {
                tracing::debug!(source, %error, "failed to compile expression");
                Err(error)
            },
        }
    }

    /// Evaluates the expression against `context`.
    ///
    /// Evaluation has no side effects: calling this repeatedly with equal
    /// contexts gives equal results.
    ///
    /// # Errors
    /// Returns the first evaluation error encountered in the tree.
    #[tracing::instrument(level = "trace", skip_all, fields(source = %self.source))]
    pub fn evaluate(&self, context: &Context) -> Result<Value, EvaluationError> {
        context.eval(&self.root)
    }

    /// The text this expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root of the compiled tree.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }
}

impl FromStr for CompiledExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

/// Displays the fully parenthesised tree, not the original source.
impl std::fmt::Display for CompiledExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root)
    }
}
