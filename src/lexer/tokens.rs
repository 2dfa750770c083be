//! Token reading and recognition for the lexer.
//!
//! This module provides methods for reading the various token types from
//! the input: operators and punctuation, string literals, integer
//! literals, and identifiers/keywords. Anything unrecognized becomes an
//! [`TokenKind::Illegal`] token.

use super::Lexer;
use crate::token::{Span, Token, TokenKind};

impl<'a> Lexer<'a> {
    /// Creates a single-character token and advances the lexer.
    fn single_char_token(
        &mut self,
        kind: TokenKind,
        c: char,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, c.to_string(), span)
    }

    /// Creates a two-character token from the current and next characters.
    fn two_char_token(
        &mut self,
        kind: TokenKind,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        self.advance();
        self.advance();
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(kind, &self.input[start_pos..self.pos], span)
    }

    /// Reads and returns the next token from the input.
    ///
    /// This method is called by [`next_token`](super::Lexer::next_token)
    /// after whitespace has been skipped and end of input has been ruled
    /// out. Recognition priority: two-character operators first, then
    /// single-character operators and punctuation, then string, integer,
    /// and identifier/keyword literals.
    pub(super) fn read_token(&mut self) -> Token {
        // next_token() checks is_eof() before calling read_token(), so a
        // current character is always present.
        let Some(c) = self.current_char() else {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, "", span);
        };

        let start_pos = self.pos;
        let start_line = self.line;
        let start_column = self.column;

        match c {
            '=' if self.peek_char() == Some('=') => {
                self.two_char_token(TokenKind::Eq, start_pos, start_line, start_column)
            }
            '=' => self.single_char_token(TokenKind::Assign, c, start_pos, start_line, start_column),
            '!' if self.peek_char() == Some('=') => {
                self.two_char_token(TokenKind::NotEq, start_pos, start_line, start_column)
            }
            '!' => self.single_char_token(TokenKind::Bang, c, start_pos, start_line, start_column),
            '+' => self.single_char_token(TokenKind::Plus, c, start_pos, start_line, start_column),
            '-' => self.single_char_token(TokenKind::Minus, c, start_pos, start_line, start_column),
            '*' => {
                self.single_char_token(TokenKind::Asterisk, c, start_pos, start_line, start_column)
            }
            '/' => self.single_char_token(TokenKind::Slash, c, start_pos, start_line, start_column),
            '<' => self.single_char_token(TokenKind::Lt, c, start_pos, start_line, start_column),
            '>' => self.single_char_token(TokenKind::Gt, c, start_pos, start_line, start_column),
            ',' => self.single_char_token(TokenKind::Comma, c, start_pos, start_line, start_column),
            ';' => {
                self.single_char_token(TokenKind::Semicolon, c, start_pos, start_line, start_column)
            }
            '(' => self.single_char_token(TokenKind::LParen, c, start_pos, start_line, start_column),
            ')' => self.single_char_token(TokenKind::RParen, c, start_pos, start_line, start_column),
            '{' => self.single_char_token(TokenKind::LBrace, c, start_pos, start_line, start_column),
            '}' => self.single_char_token(TokenKind::RBrace, c, start_pos, start_line, start_column),
            '"' => self.read_string(start_pos, start_line, start_column),
            _ if c.is_ascii_digit() => self.read_number(start_pos, start_line, start_column),
            _ if c.is_ascii_alphabetic() || c == '_' => {
                self.read_identifier(start_pos, start_line, start_column)
            }
            _ => self.single_char_token(TokenKind::Illegal, c, start_pos, start_line, start_column),
        }
    }

    /// Reads a string literal from the input.
    ///
    /// The opening double quote is at the current position. Content is
    /// read verbatim until the next `"` or the end of input; the
    /// surrounding quotes are stripped from the literal but included in
    /// the span. An unterminated string yields a token containing
    /// everything up to the end of input.
    fn read_string(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        self.advance(); // skip opening "
        let content_start = self.pos;

        while let Some(c) = self.current_char() {
            if c == '"' {
                break;
            }
            self.advance();
        }

        let literal = &self.input[content_start..self.pos];

        // Consume the closing quote when the string is terminated.
        if self.current_char() == Some('"') {
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::String, literal, span)
    }

    /// Reads an integer literal from the input.
    ///
    /// The literal keeps the source digits as text; the parser converts
    /// it to `i64` when building the AST node.
    fn read_number(&mut self, start_pos: usize, start_line: usize, start_column: usize) -> Token {
        while self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::Int, &self.input[start_pos..self.pos], span)
    }

    /// Reads an identifier or keyword from the input.
    ///
    /// Identifiers start with an ASCII letter or underscore and continue
    /// with ASCII alphanumerics or underscores. After reading, a keyword
    /// lookup promotes matching literals to their keyword kind.
    fn read_identifier(
        &mut self,
        start_pos: usize,
        start_line: usize,
        start_column: usize,
    ) -> Token {
        while self
            .current_char()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }

        let literal = &self.input[start_pos..self.pos];
        let span = Span::new(start_pos, self.pos, start_line, start_column);
        Token::new(TokenKind::lookup_ident(literal), literal, span)
    }
}
