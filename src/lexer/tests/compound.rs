//! Tests for complete program fragments.

use super::*;

#[test]
fn test_let_statement_token_sequence() {
    let pairs = tokenize_pairs("let x = 5; !5 != 10;");
    let expected = vec![
        (TokenKind::Let, "let".to_string()),
        (TokenKind::Ident, "x".to_string()),
        (TokenKind::Assign, "=".to_string()),
        (TokenKind::Int, "5".to_string()),
        (TokenKind::Semicolon, ";".to_string()),
        (TokenKind::Bang, "!".to_string()),
        (TokenKind::Int, "5".to_string()),
        (TokenKind::NotEq, "!=".to_string()),
        (TokenKind::Int, "10".to_string()),
        (TokenKind::Semicolon, ";".to_string()),
        (TokenKind::Eof, String::new()),
    ];
    assert_eq!(pairs, expected);
}

#[test]
fn test_function_definition_tokens() {
    let kinds = tokenize_kinds("let add = fn(x, y) { x + y; };");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Ident,
            TokenKind::Assign,
            TokenKind::Function,
            TokenKind::LParen,
            TokenKind::Ident,
            TokenKind::Comma,
            TokenKind::Ident,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Ident,
            TokenKind::Plus,
            TokenKind::Ident,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_if_else_tokens() {
    let kinds = tokenize_kinds("if (5 < 10) { return true; } else { return false; }");
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::LParen,
            TokenKind::Int,
            TokenKind::Lt,
            TokenKind::Int,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::True,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Else,
            TokenKind::LBrace,
            TokenKind::Return,
            TokenKind::False,
            TokenKind::Semicolon,
            TokenKind::RBrace,
            TokenKind::Eof
        ]
    );
}
