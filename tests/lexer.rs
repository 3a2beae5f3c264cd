use exprbind::{
    error::LexicalError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};
use pretty_assertions::assert_eq;

fn tokens(src: &str) -> Vec<(Token, usize)> {
    Lexer::new(src).collect::<Result<_, _>>()
                   .unwrap_or_else(|e| panic!("Lexing {src:?} failed: {e}"))
}

fn lex_error(src: &str) -> LexicalError {
    match Lexer::new(src).collect::<Result<Vec<_>, _>>() {
        Ok(tokens) => panic!("Lexing {src:?} succeeded with {tokens:?}"),
        Err(e) => e,
    }
}

fn symbol(s: &str) -> Token {
    Token::Symbol(s.to_owned())
}

fn number(s: &str) -> Token {
    Token::Number(s.to_owned())
}

fn word(s: &str) -> Token {
    Token::Word(s.to_owned())
}

#[test]
fn classifies_by_first_character() {
    assert_eq!(tokens(r#"12 .5 abc "x" +"#),
               vec![(number("12"), 0),
                    (number(".5"), 3),
                    (word("abc"), 6),
                    (Token::String("x".to_owned()), 10),
                    (symbol("+"), 14)]);
}

#[test]
fn numbers_and_words_are_greedy() {
    assert_eq!(tokens("123abc abc123 4.34e3f 0xFFL"),
               vec![(number("123abc"), 0),
                    (word("abc123"), 7),
                    (number("4.34e3f"), 14),
                    (number("0xFFL"), 22)]);
}

#[test]
fn words_stop_at_punctuation() {
    assert_eq!(tokens("(int)x"),
               vec![(symbol("("), 0), (word("int"), 1), (symbol(")"), 4), (word("x"), 5)]);
}

#[test]
fn words_stop_at_unicode_punctuation() {
    assert_eq!(tokens("abc¿"), vec![(word("abc"), 0), (symbol("¿"), 3)]);
    assert_eq!(tokens("«x»"), vec![(symbol("«"), 0), (word("x"), 2), (symbol("»"), 3)]);
    assert_eq!(tokens("héllo·"), vec![(word("héllo"), 0), (symbol("·"), 6)]);
}

#[test]
fn symbols_are_greedy_but_brackets_stand_alone() {
    assert_eq!(tokens("1 <<> 3"),
               vec![(number("1"), 0), (symbol("<<>"), 2), (number("3"), 6)]);
    assert_eq!(tokens("-({0})"),
               vec![(symbol("-"), 0),
                    (symbol("("), 1),
                    (symbol("{"), 2),
                    (number("0"), 3),
                    (symbol("}"), 4),
                    (symbol(")"), 5)]);
    assert_eq!(tokens("a&&!b"),
               vec![(word("a"), 0), (symbol("&&!"), 1), (word("b"), 4)]);
}

#[test]
fn whitespace_only_input_has_no_tokens() {
    assert!(tokens("").is_empty());
    assert!(tokens(" \t\r\n ").is_empty());
}

#[test]
fn string_escapes_are_decoded() {
    let src = r#""\' \" \\ \0 \a \b \f \n \r \t \v""#;
    assert_eq!(tokens(src),
               vec![(Token::String("' \" \\ \0 \u{7} \u{8} \u{c} \n \r \t \u{b}".to_owned()), 0)]);
}

#[test]
fn empty_string_and_non_ascii_content() {
    assert_eq!(tokens(r#""" "héllo""#),
               vec![(Token::String(String::new()), 0), (Token::String("héllo".to_owned()), 3)]);
}

#[test]
fn unrecognized_escape() {
    let error = lex_error(r#"1 + "ab\qc""#);
    assert_eq!(error,
               LexicalError::UnrecognizedEscape { escape:   'q',
                                                  position: 7, });
    assert_eq!(error.to_string(), "unrecognized escape sequence '\\q' at position 7");
}

#[test]
fn unterminated_string() {
    assert_eq!(lex_error(r#"{0} + "abc"#),
               LexicalError::UnterminatedString { position: 6 });
    assert_eq!(lex_error(r#""abc\"#),
               LexicalError::UnterminatedString { position: 0 });
}

#[test]
fn unrecognized_character() {
    let error = lex_error("1 + ٣");
    assert_eq!(error,
               LexicalError::UnrecognizedCharacter { character: '٣',
                                                     position:  4, });
    assert_eq!(error.position(), 4);
}

#[test]
fn token_helpers() {
    let token = symbol("<=");
    assert_eq!(token.kind(), TokenKind::Symbol);
    assert_eq!(token.lexeme(), "<=");
    assert!(token.is_symbol("<="));
    assert!(!token.is_symbol("<"));
    assert!(!token.is_word("<="));

    assert!(word("null").is_word("null"));
    assert_eq!(Token::String("a b".to_owned()).kind(), TokenKind::String);
    assert_eq!(number("42").to_string(), "Number '42'");
}

#[test]
fn source_is_kept() {
    let lexer = Lexer::new("{0} + 1");
    assert_eq!(lexer.source(), "{0} + 1");
}
