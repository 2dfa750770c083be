//! Tests for whitespace handling.

use super::*;

#[test]
fn test_whitespace_only() {
    let kinds = tokenize_kinds("   \t\r\n");
    assert_eq!(kinds, vec![TokenKind::Eof]);
}

#[test]
fn test_whitespace_between_tokens() {
    let kinds = tokenize_kinds("let \t x \n = \r 5");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Int,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_no_whitespace_needed_between_punctuation() {
    let kinds = tokenize_kinds("fn(x){x;}");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Eof
        ]
    );
}
