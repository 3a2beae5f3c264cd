use crate::{
    ast::Node,
    error::ParseError,
    interpreter::parser::{
        binary::parse_conditional_or,
        utils::{GROUP_COST, TokenStream},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression.
///
/// This is the entry point for expression parsing, and the point grouped
/// sub-expressions re-enter. It begins at the lowest-precedence level,
/// conditional OR, and recursively descends through the precedence
/// hierarchy:
///
/// ```text
///   1  ||            conditional or
///   2  &&            conditional and
///   3  |             logical or
///   4  ^             logical xor
///   5  &             logical and
///   6  == !=         equality
///   7  < <= > >=     relational (at most one per level)
///   8  << >>         shift
///   9  + -           additive
///  10  * / %         multiplicative
///  11  - + ! ~       unary, true, false
///  12  base          literals, null, casts, groups, {N}
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of the expression.
///
/// # Returns
/// The parsed node tree.
///
/// # Errors
/// Any syntax error, including `NestingTooDeep` once groups are nested past
/// the budget of the token stream.
pub fn parse_expression(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    tokens.descend(GROUP_COST)?;
    let node = parse_conditional_or(tokens);
    tokens.ascend(GROUP_COST);
    node
}

/// Parses `source` as exactly one expression.
///
/// The lexer is created here and dropped when this function returns, whether
/// parsing succeeded or not.
///
/// # Errors
/// Any lexical or syntax error, and `UnexpectedInput` when tokens remain
/// after a complete expression, e.g. the `]` in `(1 + 2]` or the second `<`
/// in `1 < 2 < 3`.
///
/// # Example
/// ```
/// use exprbind::interpreter::parser::core::parse_complete;
///
/// assert!(parse_complete("1 < 2").is_ok());
/// assert!(parse_complete("1 < 2 < 3").is_err());
/// ```
pub fn parse_complete(source: &str) -> ParseResult<Node> {
    let mut tokens = TokenStream::new(source);
    let node = parse_expression(&mut tokens)?;

    match tokens.next()? {
        None => Ok(node),
        Some((token, position)) => Err(ParseError::UnexpectedInput { token: token.lexeme()
                                                                              .to_owned(),
                                                                     position }),
    }
}
