use crate::{
    ast::{BinaryOperator, Node},
    error::EvaluationError,
    interpreter::value::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvaluationError` describing the failure.
pub type EvalResult<T> = Result<T, EvaluationError>;

static EMPTY: Context = Context { values: Vec::new() };

/// Stores the values visible to `{N}` references during one evaluation.
///
/// ## Usage
///
/// A `Context` is built for each evaluation call, usually with a single bound
/// value at index 0, and dropped afterwards. It is never mutated while an
/// expression is evaluated, so one compiled expression can be evaluated
/// concurrently with different contexts. Expressions without variables can
/// use the shared [`Context::empty`] instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: Vec<Value>,
}

impl From<Vec<Value>> for Context {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl FromIterator<Value> for Context {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self { values: iter.into_iter().collect() }
    }
}

impl Context {
    /// Creates a context over `values`; `values[0]` is `{0}`.
    #[must_use]
    pub const fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Creates a context with a single value at index 0.
    ///
    /// # Example
    /// ```
    /// use exprbind::{compile, interpreter::{evaluator::core::Context, value::Value}};
    ///
    /// let doubled = compile("{0} * 2").unwrap();
    /// assert_eq!(doubled.evaluate(&Context::single(21)), Ok(Value::Int32(42)));
    /// ```
    #[must_use]
    pub fn single(value: impl Into<Value>) -> Self {
        Self { values: vec![value.into()] }
    }

    /// The shared context with no values.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY
    }

    /// Number of substitution values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` if the context holds no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All substitution values, in index order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Looks up the value bound to `{index}`.
    ///
    /// # Errors
    /// Returns `VariableIndexOutOfRange` if `index >= self.len()`.
    pub fn get(&self, index: usize) -> EvalResult<&Value> {
        self.values
            .get(index)
            .ok_or(EvaluationError::VariableIndexOutOfRange { index,
                                                              count: self.values.len() })
    }

    /// Evaluates a node against this context.
    ///
    /// Children are evaluated left to right and evaluation stops at the first
    /// error. `&&` and `||` evaluate their right operand only when the left
    /// one does not already decide the result.
    ///
    /// # Example
    /// ```
    /// use exprbind::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let node = Node::binary(BinaryOperator::Add,
    ///                         Node::Variable { index: 0 },
    ///                         Node::Constant(Value::Int64(1)));
    /// let context = Context::single(41);
    ///
    /// assert_eq!(context.eval(&node), Ok(Value::Int64(42)));
    /// ```
    pub fn eval(&self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::Constant(value) => Ok(value.clone()),
            Node::Variable { index } => self.get(*index).cloned(),
            Node::Unary { op, operand } => Self::eval_unary(*op, &self.eval(operand)?),
            Node::Binary { op: op @ (BinaryOperator::ConditionalAnd | BinaryOperator::ConditionalOr),
                           left,
                           right, } => self.eval_conditional(*op, left, right),
            Node::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, &left, &right)
            },
            Node::Cast { target, operand } => Self::eval_cast(*target, &self.eval(operand)?),
        }
    }

    /// Evaluates `&&` and `||` with short-circuiting.
    ///
    /// Both operands must be booleans; the right one is only checked when it
    /// is evaluated.
    fn eval_conditional(&self,
                        op: BinaryOperator,
                        left: &Node,
                        right: &Node)
                        -> EvalResult<Value> {
        let symbol = op.symbol();
        let left = self.eval(left)?.as_bool(symbol)?;

        let decided = match op {
            BinaryOperator::ConditionalAnd => !left,
            _ => left,
        };
        if decided {
            return Ok(Value::Boolean(left));
        }

        Ok(Value::Boolean(self.eval(right)?.as_bool(symbol)?))
    }
}
