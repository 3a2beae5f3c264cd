use crate::interpreter::value::{Value, ValueType};

/// A binary operator, listed from the lowest precedence level to the highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `||`, short-circuiting.
    ConditionalOr,
    /// `&&`, short-circuiting.
    ConditionalAnd,
    /// `|` on integers or booleans.
    LogicalOr,
    /// `^` on integers or booleans.
    LogicalXor,
    /// `&` on integers or booleans.
    LogicalAnd,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<<`
    ShiftLeft,
    /// `>>`
    ShiftRight,
    /// `+`, also string concatenation.
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `%`
    Modulus,
}

impl BinaryOperator {
    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::ConditionalOr => "||",
            Self::ConditionalAnd => "&&",
            Self::LogicalOr => "|",
            Self::LogicalXor => "^",
            Self::LogicalAnd => "&",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A prefix operator. Unary `+` is dropped by the parser and has no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `!`
    Not,
    /// `~`
    Complement,
}

impl UnaryOperator {
    /// The source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Complement => "~",
        }
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A node of a compiled expression.
///
/// The tree is built once by the parser and never mutated afterwards, so it
/// can be evaluated any number of times, from any number of threads.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A literal value.
    Constant(Value),
    /// A positional substitution `{index}`.
    Variable {
        /// Index into the evaluation context.
        index: usize,
    },
    /// A prefix operation.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operand.
        operand: Box<Self>,
    },
    /// A binary operation.
    Binary {
        /// The operator.
        op:    BinaryOperator,
        /// Left-hand operand.
        left:  Box<Self>,
        /// Right-hand operand.
        right: Box<Self>,
    },
    /// An explicit conversion `(type) operand`.
    Cast {
        /// The type to convert to.
        target:  ValueType,
        /// The value being converted.
        operand: Box<Self>,
    },
}

impl Node {
    /// Builds a [`Node::Unary`].
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds a [`Node::Binary`].
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a [`Node::Cast`].
    #[must_use]
    pub fn cast(target: ValueType, operand: Self) -> Self {
        Self::Cast { target,
                     operand: Box::new(operand) }
    }
}

/// Renders the tree back to source text with every operation parenthesised,
/// which makes the parsed precedence visible.
///
/// # Example
/// ```
/// let expression = exprbind::compile("1 + 2 * -{0}").unwrap();
/// assert_eq!(expression.root().to_string(), "(1 + (2 * (-{0})))");
/// ```
impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Constant(value) => value.write_literal(f),
            Self::Variable { index } => write!(f, "{{{index}}}"),
            Self::Unary { op, operand } => write!(f, "({op}{operand})"),
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Cast { target, operand } => write!(f, "(({}) {operand})", target.cast_name()),
        }
    }
}
