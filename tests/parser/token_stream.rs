use treevm::lexer::{InputMode, tokenize};
use treevm::parser::{ParseErrorKind, TokenStream};

#[test]
fn consumes_from_the_front() {
    let mut stream = TokenStream::new(tokenize("= x 1", InputMode::File));
    assert_eq!(stream.len(), 3);
    assert_eq!(stream.peek().map(|token| token.as_str()), Some("="));
    assert_eq!(stream.next().map(|token| token.lexeme), Some("=".to_string()));
    assert_eq!(stream.peek().map(|token| token.as_str()), Some("x"));
    assert_eq!(stream.len(), 2);
}

#[test]
fn peek_does_not_consume() {
    let stream = TokenStream::from_source("@", InputMode::File);
    assert!(stream.peek().is_some());
    assert!(stream.peek().is_some());
    assert_eq!(stream.len(), 1);
}

#[test]
fn expect_on_empty_stream_is_premature_end() {
    let mut stream = TokenStream::from_source("", InputMode::File);
    assert!(stream.is_empty());
    let err = stream.expect("expression").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::PrematureEnd);
    assert_eq!(err.expected, vec!["expression".to_string()]);
}
