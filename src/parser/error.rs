//! Parse error types.
//!
//! This module defines [`ParseError`], which represents errors that can
//! occur while turning the token stream into an AST.

use crate::token::{Span, Token, TokenKind};

/// The kind of parse error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The parser expected a specific token kind and found another.
    UnexpectedToken,
    /// No expression can start with the current token.
    ///
    /// This is also how illegal characters surface: the lexer turns them
    /// into `Illegal` tokens, which have no prefix parse function.
    NoPrefixParseFn,
    /// The callee of a call expression is not an identifier or function
    /// literal.
    InvalidCallTarget,
    /// An integer literal does not fit in a signed 64-bit value.
    InvalidIntegerLiteral,
}

/// An error that occurred during parsing.
///
/// Contains a human-readable message and the source location where the
/// error occurred, enabling rich error reporting. A parse error halts the
/// program parse; no recovery is attempted.
#[derive(Debug)]
pub struct ParseError {
    /// A human-readable description of the error.
    message: String,
    /// The source location where the error occurred.
    span: Span,
    /// The kind of error, for structured error handling.
    kind: ParseErrorKind,
}

impl ParseError {
    /// Creates an error for a token that does not match the expected kind.
    pub(super) fn unexpected_token(expected: TokenKind, got: &Token) -> Self {
        ParseError {
            message: format!("Expected next token to be {}, got {}", expected, got.kind),
            span: got.span,
            kind: ParseErrorKind::UnexpectedToken,
        }
    }

    /// Creates an error for a token no expression can start with.
    pub(super) fn no_prefix_parse_fn(token: &Token) -> Self {
        ParseError {
            message: format!("No prefix parse function for {}", token.kind),
            span: token.span,
            kind: ParseErrorKind::NoPrefixParseFn,
        }
    }

    /// Creates an error for a call whose callee is not callable syntax.
    pub(super) fn invalid_call_target(span: Span) -> Self {
        ParseError {
            message: "Expected identifier or function literal for function call".to_string(),
            span,
            kind: ParseErrorKind::InvalidCallTarget,
        }
    }

    /// Creates an error for an integer literal outside the `i64` range.
    pub(super) fn invalid_integer_literal(literal: &str, span: Span) -> Self {
        ParseError {
            message: format!("Integer literal '{}' is out of range", literal),
            span,
            kind: ParseErrorKind::InvalidIntegerLiteral,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location where the error occurred.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Returns a short heading for diagnostic reports.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnexpectedToken => "Unexpected token",
            ParseErrorKind::NoPrefixParseFn => "Expression expected",
            ParseErrorKind::InvalidCallTarget => "Invalid call target",
            ParseErrorKind::InvalidIntegerLiteral => "Invalid integer literal",
        }
    }

    /// Returns an optional help message for diagnostic reports.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            ParseErrorKind::InvalidCallTarget => {
                Some("only identifiers and fn literals can be called")
            }
            ParseErrorKind::InvalidIntegerLiteral => {
                Some("integers must fit in a signed 64-bit value")
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.span.line, self.span.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}
