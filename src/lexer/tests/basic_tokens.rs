//! Tests for punctuation and empty input.

use super::*;

#[test]
fn test_empty_input() {
    let kinds = tokenize_kinds("");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_punctuation() {
    let kinds = tokenize_kinds("(){},;");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_punctuation_with_spaces() {
    let kinds = tokenize_kinds("( , )");
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::Comma,
            TokenKind::RParen,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_single_char_literals_preserved() {
    let pairs = tokenize_pairs("{;");
    assert_eq!(pairs[0], (TokenKind::LBrace, "{".to_string()));
    assert_eq!(pairs[1], (TokenKind::Semicolon, ";".to_string()));
}

#[test]
fn test_eof_literal_is_empty() {
    let pairs = tokenize_pairs("x");
    assert_eq!(pairs.last().unwrap(), &(TokenKind::Eof, String::new()));
}
