//! Lexical analyzer for the Monkey language.
//!
//! This module provides the [`Lexer`] struct which converts source code
//! text into a stream of [`Token`]s for parsing.
//!
//! # Overview
//!
//! The lexer performs the following tasks:
//! - Scans the input character by character with one character of lookahead
//! - Recognizes identifiers, keywords, integer and string literals,
//!   operators, and punctuation
//! - Tracks source positions for error reporting
//! - Skips ASCII whitespace (there is no comment syntax)
//!
//! Unrecognized characters do not abort lexing: they become
//! [`TokenKind::Illegal`] tokens, which the parser later rejects when it
//! finds no prefix parse function for them.
//!
//! # Supported Tokens
//!
//! - **Keywords**: `fn`, `let`, `true`, `false`, `if`, `else`, `return`
//! - **Identifiers**: Start with an ASCII letter or underscore, continue
//!   with ASCII alphanumerics and underscores
//! - **Integer literals**: Sequences of ASCII digits; the digits are kept
//!   as text and converted to `i64` by the parser
//! - **String literals**: Enclosed in double quotes, read verbatim with no
//!   escape sequences; an unterminated string runs to the end of input
//! - **Operators**: `=`, `+`, `-`, `*`, `/`, `!`, `<`, `>`, `==`, `!=`
//! - **Punctuation**: `,`, `;`, `(`, `)`, `{`, `}`
//!
//! # Examples
//!
//! ```
//! use monk::lexer::Lexer;
//! use monk::token::TokenKind;
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! let tokens = lexer.tokenize();
//!
//! assert_eq!(tokens[0].kind, TokenKind::Let);
//! assert_eq!(tokens[1].kind, TokenKind::Ident);
//! assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`cursor`] - Position tracking and character navigation
//! - [`skip`] - Whitespace handling
//! - [`tokens`] - Token recognition and reading
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::token`] - Token type definitions
//! * [`crate::parser`] - Parser that consumes the token stream

mod cursor;
mod skip;
mod tokens;

#[cfg(test)]
mod tests;

use crate::token::{Span, Token, TokenKind};

/// A lexical analyzer that tokenizes Monkey source code.
///
/// The `Lexer` maintains its position within the input and tracks
/// line/column numbers for error reporting. It is designed to be used once
/// per source text.
///
/// # Lifetime
///
/// The `'a` lifetime parameter ties the lexer to the input string slice,
/// ensuring the input remains valid while the lexer is in use.
pub struct Lexer<'a> {
    /// The input source code being tokenized.
    pub(super) input: &'a str,
    /// Current byte position in the input.
    pub(super) pos: usize,
    /// Current line number (1-indexed).
    pub(super) line: usize,
    /// Current column number (1-indexed).
    pub(super) column: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new `Lexer` for the given input string.
    ///
    /// The lexer starts at the beginning of the input with line and column
    /// numbers initialized to 1.
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the next token from the input.
    ///
    /// Whitespace between tokens is skipped. Once the input is exhausted
    /// this returns [`TokenKind::Eof`] tokens indefinitely, so callers can
    /// pull tokens without checking for exhaustion first.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.is_eof() {
            let span = Span::new(self.pos, self.pos, self.line, self.column);
            return Token::new(TokenKind::Eof, "", span);
        }

        self.read_token()
    }

    /// Tokenizes the entire input and returns a vector of tokens.
    ///
    /// The returned vector always ends with exactly one
    /// [`TokenKind::Eof`] token, ensuring it is never empty.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }

        tokens
    }
}
