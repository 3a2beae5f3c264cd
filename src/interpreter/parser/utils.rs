use crate::{
    ast::BinaryOperator,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::core::ParseResult,
    },
};

/// Nesting budget of one parse.
///
/// Every grouped sub-expression, prefix operator, cast and chained binary
/// operator spends part of it; see [`TokenStream::descend`].
pub const MAX_DEPTH: usize = 256;

/// Budget spent by each grouped sub-expression. A group re-enters every
/// precedence level, so it costs more stack than a prefix or an operator.
pub const GROUP_COST: usize = 4;

/// A token stream with one token of lookahead.
///
/// Wraps the pull-based [`Lexer`] so the parser never sees more than the next
/// token, and converts lexical failures into [`ParseError`]s. Tokens come as
/// `(token, byte offset)` pairs.
///
/// The stream also tracks how deeply the parser has descended, which bounds
/// both the parser's recursion and the height of the resulting tree.
pub struct TokenStream<'a> {
    lexer:  Lexer<'a>,
    peeked: Option<Option<(Token, usize)>>,
    depth:  usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a stream over `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { lexer:  Lexer::new(source),
               peeked: None,
               depth:  0, }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Propagates lexical errors from the underlying lexer.
    pub fn peek(&mut self) -> ParseResult<Option<&(Token, usize)>> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().and_then(Option::as_ref))
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Propagates lexical errors from the underlying lexer.
    pub fn next(&mut self) -> ParseResult<Option<(Token, usize)>> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => Ok(self.lexer.next_token()?),
        }
    }

    /// Consumes the next token, failing if the input is exhausted.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if no token remains.
    /// - Lexical errors from the underlying lexer.
    pub fn next_required(&mut self) -> ParseResult<(Token, usize)> {
        self.next()?.ok_or_else(|| self.end_of_input())
    }

    /// Builds the error reported when a token is required but none remain.
    #[must_use]
    pub fn end_of_input(&self) -> ParseError {
        ParseError::UnexpectedEndOfInput { position: self.lexer.source().len() }
    }

    /// Spends `cost` of the nesting budget before descending further.
    ///
    /// Every successful call must be paired with [`TokenStream::ascend`]
    /// once the nested construct has been parsed.
    ///
    /// # Errors
    /// `NestingTooDeep` at the next token once more than [`MAX_DEPTH`] is
    /// in use.
    pub fn descend(&mut self, cost: usize) -> ParseResult<()> {
        self.depth += cost;
        if self.depth <= MAX_DEPTH {
            return Ok(());
        }

        let position = match self.peek()? {
            Some((_, position)) => *position,
            None => self.lexer.source().len(),
        };
        Err(ParseError::NestingTooDeep { position })
    }

    /// Returns `cost` to the nesting budget.
    pub const fn ascend(&mut self, cost: usize) {
        self.depth = self.depth.saturating_sub(cost);
    }

    /// Consumes the next token if it is a binary operator accepted by
    /// `accept`.
    ///
    /// This is the loop condition of every binary precedence level.
    ///
    /// # Returns
    /// The matched operator, or `None` (and nothing consumed) otherwise.
    pub fn next_operator_if(&mut self,
                            accept: impl Fn(BinaryOperator) -> bool)
                            -> ParseResult<Option<BinaryOperator>> {
        let op = match self.peek()? {
            Some((token, _)) => token_to_binary_operator(token).filter(|op| accept(*op)),
            None => None,
        };
        if op.is_some() {
            self.next()?;
        }
        Ok(op)
    }
}

/// Requires the next token to be the symbol `expected`.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the input ends.
/// - `ExpectedToken` naming the token actually found.
pub fn expect_symbol(tokens: &mut TokenStream<'_>, expected: &'static str) -> ParseResult<()> {
    match tokens.next_required()? {
        (token, _) if token.is_symbol(expected) => Ok(()),
        (token, position) => Err(ParseError::ExpectedToken { expected,
                                                             found: token.lexeme().to_owned(),
                                                             position }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Only symbol tokens can be operators; the spelling must match exactly, so
/// the greedily lexed `<<>` maps to nothing.
///
/// # Example
/// ```
/// use exprbind::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::utils::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Symbol("<<".into())),
///            Some(BinaryOperator::ShiftLeft));
/// assert_eq!(token_to_binary_operator(&Token::Symbol("<<>".into())), None);
/// assert_eq!(token_to_binary_operator(&Token::Word("and".into())), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    let Token::Symbol(symbol) = token else {
        return None;
    };
    match symbol.as_str() {
        "||" => Some(BinaryOperator::ConditionalOr),
        "&&" => Some(BinaryOperator::ConditionalAnd),
        "|" => Some(BinaryOperator::LogicalOr),
        "^" => Some(BinaryOperator::LogicalXor),
        "&" => Some(BinaryOperator::LogicalAnd),
        "==" => Some(BinaryOperator::Equal),
        "!=" => Some(BinaryOperator::NotEqual),
        "<" => Some(BinaryOperator::Less),
        "<=" => Some(BinaryOperator::LessEqual),
        ">" => Some(BinaryOperator::Greater),
        ">=" => Some(BinaryOperator::GreaterEqual),
        "<<" => Some(BinaryOperator::ShiftLeft),
        ">>" => Some(BinaryOperator::ShiftRight),
        "+" => Some(BinaryOperator::Add),
        "-" => Some(BinaryOperator::Subtract),
        "*" => Some(BinaryOperator::Multiply),
        "/" => Some(BinaryOperator::Divide),
        "%" => Some(BinaryOperator::Modulus),
        _ => None,
    }
}
