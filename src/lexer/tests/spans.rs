//! Tests for span position verification.

use super::*;

#[test]
fn test_span_positions() {
    let mut lexer = Lexer::new("foo");
    let tokens = lexer.tokenize();

    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 3);
}

#[test]
fn test_span_line_column() {
    let mut lexer = Lexer::new("foo");
    let tokens = lexer.tokenize();

    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);
}

#[test]
fn test_span_multiline() {
    let mut lexer = Lexer::new("a\nb");
    let tokens = lexer.tokenize();

    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[0].span.column, 1);

    assert_eq!(tokens[1].span.line, 2);
    assert_eq!(tokens[1].span.column, 1);
}

#[test]
fn test_span_string_literal_includes_quotes() {
    let mut lexer = Lexer::new(r#""hello""#);
    let tokens = lexer.tokenize();

    assert_eq!(tokens[0].span.start, 0);
    assert_eq!(tokens[0].span.end, 7);
}

#[test]
fn test_span_after_whitespace() {
    let mut lexer = Lexer::new("   foo");
    let tokens = lexer.tokenize();

    assert_eq!(tokens[0].span.start, 3);
    assert_eq!(tokens[0].span.end, 6);
    assert_eq!(tokens[0].span.column, 4);
}

#[test]
fn test_span_two_char_operator() {
    let mut lexer = Lexer::new("a == b");
    let tokens = lexer.tokenize();

    assert_eq!(tokens[1].span.start, 2);
    assert_eq!(tokens[1].span.end, 4);
}
