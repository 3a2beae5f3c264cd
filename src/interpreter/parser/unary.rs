use crate::{
    ast::{Node, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            number::parse_number,
            utils::{TokenStream, expect_symbol},
        },
        value::{Value, ValueType},
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `-` (numeric negation)
/// - `+` (accepted and discarded)
/// - `!` (logical not)
/// - `~` (bitwise complement)
///
/// and the boolean keywords `true` and `false`. Prefix operators are
/// right-associative, so `- ~x` is parsed as `-(~x)`. Stacked prefixes need
/// whitespace between them: `-~x` and `--x` lex as the single symbols `-~`
/// and `--` and are rejected.
///
/// If no prefix is present, the function delegates to [`parse_base`].
///
/// Grammar:
/// ```text
///     unary := ("-" | "+" | "!" | "~") unary
///            | "true" | "false"
///            | base
/// ```
pub fn parse_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    enum Prefix {
        Operator(UnaryOperator),
        Plus,
        Boolean(bool),
    }

    let prefix = match tokens.peek()? {
        Some((Token::Symbol(s), _)) => match s.as_str() {
            "-" => Some(Prefix::Operator(UnaryOperator::Negate)),
            "!" => Some(Prefix::Operator(UnaryOperator::Not)),
            "~" => Some(Prefix::Operator(UnaryOperator::Complement)),
            "+" => Some(Prefix::Plus),
            _ => None,
        },
        Some((Token::Word(w), _)) => match w.as_str() {
            "true" => Some(Prefix::Boolean(true)),
            "false" => Some(Prefix::Boolean(false)),
            _ => None,
        },
        _ => None,
    };

    let Some(prefix) = prefix else {
        return parse_base(tokens);
    };
    tokens.next()?;

    match prefix {
        Prefix::Operator(op) => Ok(Node::unary(op, parse_nested_unary(tokens)?)),
        Prefix::Plus => parse_nested_unary(tokens),
        Prefix::Boolean(b) => Ok(Node::Constant(Value::Boolean(b))),
    }
}

/// Parses the operand of a prefix operator or cast, one level deeper.
fn parse_nested_unary(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    tokens.descend(1)?;
    let operand = parse_unary(tokens);
    tokens.ascend(1);
    operand
}

/// Parses a base (atomic) expression.
///
/// Base expressions include:
/// - numeric literals
/// - string literals
/// - the `null` keyword
/// - casts `(type) unary`
/// - parenthesised expressions `( expression )`
/// - variable references `{N}`
///
/// A `(` directly followed by a word always starts a cast, which is why
/// `(null)` is rejected as a cast to an unknown type.
///
/// Grammar:
/// ```text
///     base := NUMBER | STRING | "null"
///           | "(" WORD ")" unary
///           | "(" expression ")"
///           | "{" NUMBER "}"
/// ```
///
/// # Errors
/// - `UnexpectedEndOfInput` if no token remains.
/// - `UnexpectedInput` for a bare word other than `null`.
/// - `ExpectedExpression` for a symbol that cannot start an operand.
/// - Errors from the cast, group and variable sub-parsers.
pub fn parse_base(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let (token, position) = tokens.next_required()?;

    match token {
        Token::Number(literal) => parse_number(&literal).map(Node::Constant)
                                                        .ok_or(ParseError::InvalidNumber { literal,
                                                                                           position }),
        Token::String(value) => Ok(Node::Constant(Value::String(value))),
        Token::Word(word) if word == "null" => Ok(Node::Constant(Value::Null)),
        Token::Word(word) => Err(ParseError::UnexpectedInput { token: word,
                                                               position }),
        Token::Symbol(symbol) if symbol == "(" => parse_parenthesized(tokens),
        Token::Symbol(symbol) if symbol == "{" => parse_variable(tokens),
        Token::Symbol(found) => Err(ParseError::ExpectedExpression { found, position }),
    }
}

/// Parses what follows an opening `(`: a cast or a grouped expression.
fn parse_parenthesized(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    if matches!(tokens.peek()?, Some((Token::Word(_), _))) {
        return parse_cast(tokens);
    }

    let inner = parse_expression(tokens)?;
    expect_symbol(tokens, ")")?;
    Ok(inner)
}

/// Parses `type) unary`, the remainder of a cast.
///
/// The operand is parsed at unary precedence, so `(int) -x * 2` casts `-x`
/// and then multiplies.
///
/// # Errors
/// - `UnknownCastType` if the word is not a type name.
/// - `ExpectedToken` if the closing `)` is missing.
fn parse_cast(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let (token, position) = tokens.next_required()?;
    let name = token.lexeme();
    let target =
        ValueType::from_cast_name(name).ok_or_else(|| ParseError::UnknownCastType { name: name.to_owned(),
                                                                                    position })?;
    expect_symbol(tokens, ")")?;

    let operand = parse_nested_unary(tokens)?;
    Ok(Node::cast(target, operand))
}

/// Parses `N}`, the remainder of a variable reference.
///
/// `N` must be a plain non-negative `Int32` literal; hexadecimal is accepted
/// since it parses to the same type.
///
/// # Errors
/// - `InvalidVariableIndex` if the content is not such a literal.
/// - `ExpectedToken` if the closing `}` is missing.
fn parse_variable(tokens: &mut TokenStream<'_>) -> ParseResult<Node> {
    let (token, position) = tokens.next_required()?;

    let index = match &token {
        Token::Number(literal) => match parse_number(literal) {
            Some(Value::Int32(index)) => usize::try_from(index).ok(),
            _ => None,
        },
        _ => None,
    };
    let Some(index) = index else {
        return Err(ParseError::InvalidVariableIndex { literal: token.lexeme().to_owned(),
                                                      position });
    };

    expect_symbol(tokens, "}")?;
    Ok(Node::Variable { index })
}
