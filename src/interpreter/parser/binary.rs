use crate::{
    ast::{BinaryOperator, Node},
    interpreter::parser::{core::ParseResult, unary::parse_unary, utils::TokenStream},
};

/// Parses one left-associative binary level.
///
/// `operand` parses the next-higher level on both sides; `accept` selects the
/// operators that belong to this level.
///
/// Each operator in the chain deepens the left spine of the tree by one, so
/// it spends one unit of the nesting budget until the chain ends.
///
/// Grammar: `level := operand (op operand)*`
fn parse_left_associative(tokens: &mut TokenStream<'_>,
                          operand: fn(&mut TokenStream<'_>) -> ParseResult<Node>,
                          accept: fn(BinaryOperator) -> bool)
                          -> ParseResult<Node> {
    let mut left = operand(tokens)?;
    let mut chain = 0;
    while let Some(op) = tokens.next_operator_if(accept)? {
        tokens.descend(1)?;
        chain += 1;
        let right = operand(tokens)?;
        left = Node::binary(op, left, right);
    }
    tokens.ascend(chain);
    Ok(left)
}

/// Parses conditional OR expressions.
///
/// Grammar: `conditional_or := conditional_and ("||" conditional_and)*`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::ConditionalOr`.
pub fn parse_conditional_or(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_conditional_and, |op| {
        op == BinaryOperator::ConditionalOr
    })
}

/// Parses conditional AND expressions.
///
/// Grammar: `conditional_and := logical_or ("&&" logical_or)*`
pub fn parse_conditional_and(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_logical_or, |op| {
        op == BinaryOperator::ConditionalAnd
    })
}

/// Parses logical (non short-circuiting) OR expressions.
///
/// Grammar: `logical_or := logical_xor ("|" logical_xor)*`
pub fn parse_logical_or(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_logical_xor, |op| op == BinaryOperator::LogicalOr)
}

/// Parses logical XOR expressions.
///
/// Grammar: `logical_xor := logical_and ("^" logical_and)*`
pub fn parse_logical_xor(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_logical_and, |op| op == BinaryOperator::LogicalXor)
}

/// Parses logical AND expressions.
///
/// Grammar: `logical_and := equality ("&" equality)*`
pub fn parse_logical_and(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_equality, |op| op == BinaryOperator::LogicalAnd)
}

/// Parses equality expressions.
///
/// Grammar: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses relational expressions.
///
/// Unlike every other binary level this one does not loop: after a single
/// operator it returns, so a second relational operator is left in the
/// stream and later rejected as unexpected input. `1 < 2 < 3` is therefore a
/// syntax error rather than a comparison of a boolean with `3`.
///
/// Grammar: `relational := shift (("<" | "<=" | ">" | ">=") shift)?`
///
/// # Parameters
/// - `tokens`: Token stream with lookahead.
///
/// # Returns
/// The shift-level operand, or one comparison node.
pub fn parse_relational(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let left = parse_shift(tokens)?;

    let Some(op) = tokens.next_operator_if(is_relational_op)? else {
        return Ok(left);
    };
    let right = parse_shift(tokens)?;

    Ok(Node::binary(op, left, right))
}

/// Parses shift expressions.
///
/// Grammar: `shift := additive (("<<" | ">>") additive)*`
pub fn parse_shift(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_additive, |op| {
        matches!(op, BinaryOperator::ShiftLeft | BinaryOperator::ShiftRight)
    })
}

/// Parses addition and subtraction expressions.
///
/// Grammar: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Subtract)
    })
}

/// Parses multiplication-level expressions.
///
/// Grammar: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    parse_left_associative(tokens, parse_unary, |op| {
        matches!(op,
                 BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Modulus)
    })
}

/// Determines whether a binary operator belongs to the relational level.
///
/// # Example
/// ```
/// use exprbind::{ast::BinaryOperator, interpreter::parser::binary::is_relational_op};
///
/// assert!(is_relational_op(BinaryOperator::LessEqual));
/// assert!(!is_relational_op(BinaryOperator::Equal));
/// ```
#[must_use]
pub const fn is_relational_op(op: BinaryOperator) -> bool {
    matches!(op,
             BinaryOperator::Less
             | BinaryOperator::LessEqual
             | BinaryOperator::Greater
             | BinaryOperator::GreaterEqual)
}
