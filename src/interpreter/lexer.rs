use logos::Logos;

use crate::error::LexicalError;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The language only distinguishes four kinds of tokens; operators and
/// keywords are recognised later by the parser from their lexemes.
///
/// Each class is decided by the first character: a digit or `.` starts a
/// number, a letter a word, `"` a string, and anything else a symbol.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Numeric literal such as `42`, `4.34e3f`, `0xFFL` or the malformed
    /// `123abc`; the parser validates the lexeme.
    #[regex(r"[0-9.][\p{L}\p{N}.]*", |lex| lex.slice().to_owned())]
    Number(String),
    /// Words such as `true`, `null`, `int` or `abc123`.
    ///
    /// A word ends at whitespace, at any Unicode punctuation character, and
    /// at every printable ASCII character that is not a letter or digit, so
    /// `a+b` and `«a»` are three tokens each.
    #[regex(r"\p{L}[^\s\p{P}!-/:-@\[-`\{-~]*", |lex| lex.slice().to_owned())]
    Word(String),
    /// A string literal; the payload is the decoded contents without quotes.
    #[token("\"", lex_string)]
    String(String),
    /// Operators and brackets. Brackets are always single-character symbols;
    /// any other run of punctuation is captured whole, so `<<>` is one
    /// symbol.
    #[regex(r"[(){}]", |lex| lex.slice().to_owned())]
    #[regex(r#"[^\s\p{L}\p{N}(){}".][^\s\p{L}\p{N}(){}"]*"#, |lex| lex.slice().to_owned())]
    Symbol(String),
}

/// The classification of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Operators and brackets.
    Symbol,
    /// Keywords and type names.
    Word,
    /// Numeric literals.
    Number,
    /// String literals.
    String,
}

impl Token {
    /// The classification of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Symbol(_) => TokenKind::Symbol,
            Self::Word(_) => TokenKind::Word,
            Self::Number(_) => TokenKind::Number,
            Self::String(_) => TokenKind::String,
        }
    }

    /// The captured text; for string tokens the decoded contents.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        match self {
            Self::Symbol(s) | Self::Word(s) | Self::Number(s) | Self::String(s) => s,
        }
    }

    /// `true` if this is the symbol `symbol`.
    #[must_use]
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self, Self::Symbol(s) if s == symbol)
    }

    /// `true` if this is the word `word`.
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Self::Word(w) if w == word)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} '{}'", self.kind(), self.lexeme())
    }
}

/// Error kinds reported by the generated lexer.
///
/// Offsets are relative to the start of the token; [`Lexer::next_token`]
/// turns them into a positioned [`LexicalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// No token class matches the current character.
    #[default]
    UnrecognizedCharacter,
    /// Unknown escape sequence, `offset` points at the backslash.
    UnrecognizedEscape {
        /// The character after the backslash.
        escape: char,
        /// Offset of the backslash from the opening quote.
        offset: usize,
    },
    /// The closing quote is missing.
    UnterminatedString,
}

/// Scans the body of a string literal after its opening quote.
///
/// Returns the decoded contents and the number of bytes consumed, including
/// the closing quote when one was found.
fn scan_string(body: &str) -> (Result<String, LexErrorKind>, usize) {
    let mut value = String::new();
    let mut chars = body.char_indices();

    while let Some((index, c)) = chars.next() {
        match c {
            '"' => return (Ok(value), index + 1),
            '\\' => {
                let Some((escape_index, escape)) = chars.next() else {
                    return (Err(LexErrorKind::UnterminatedString), body.len());
                };
                let decoded = match escape {
                    '\'' => '\'',
                    '"' => '"',
                    '\\' => '\\',
                    '0' => '\0',
                    'a' => '\u{7}',
                    'b' => '\u{8}',
                    'f' => '\u{c}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'v' => '\u{b}',
                    other => {
                        let consumed = escape_index + other.len_utf8();
                        // +1 for the opening quote, which is not part of `body`.
                        return (Err(LexErrorKind::UnrecognizedEscape { escape: other,
                                                                       offset: index + 1 }),
                                consumed);
                    },
                };
                value.push(decoded);
            },
            c => value.push(c),
        }
    }

    (Err(LexErrorKind::UnterminatedString), body.len())
}

fn lex_string(lex: &mut logos::Lexer<Token>) -> Result<String, LexErrorKind> {
    let (result, consumed) = scan_string(lex.remainder());
    lex.bump(consumed);
    result
}

/// Pull-based tokenizer over an expression string.
///
/// Tokens are produced one at a time together with their byte offset. The
/// sequence is finite and cannot be restarted. The lexer borrows the source
/// for its whole lifetime and holds no other resources.
///
/// # Example
/// ```
/// use exprbind::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("{0} <= 10");
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Symbol("{".into()), 0)));
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Number("0".into()), 1)));
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Symbol("}".into()), 2)));
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Symbol("<=".into()), 4)));
/// assert_eq!(lexer.next_token().unwrap(), Some((Token::Number("10".into()), 7)));
/// assert_eq!(lexer.next_token().unwrap(), None);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: Token::lexer(source) }
    }

    /// The full source text being tokenized.
    #[must_use]
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }

    /// Reads the next token and its byte offset.
    ///
    /// # Returns
    /// - `Ok(Some((token, offset)))` for each token.
    /// - `Ok(None)` once the input is exhausted.
    ///
    /// # Errors
    /// Returns a [`LexicalError`] for an unknown escape sequence, an
    /// unterminated string or a character that cannot start a token.
    pub fn next_token(&mut self) -> Result<Option<(Token, usize)>, LexicalError> {
        let Some(result) = self.inner.next() else {
            return Ok(None);
        };
        let start = self.inner.span().start;

        match result {
            Ok(token) => Ok(Some((token, start))),
            Err(LexErrorKind::UnrecognizedCharacter) => {
                let character = self.inner.source()[start..].chars().next().unwrap_or_default();
                Err(LexicalError::UnrecognizedCharacter { character,
                                                          position: start })
            },
            Err(LexErrorKind::UnrecognizedEscape { escape, offset }) => {
                Err(LexicalError::UnrecognizedEscape { escape,
                                                       position: start + offset })
            },
            Err(LexErrorKind::UnterminatedString) => {
                Err(LexicalError::UnterminatedString { position: start })
            },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}
