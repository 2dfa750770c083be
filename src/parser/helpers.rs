//! Parser helper methods for token navigation and expectations.
//!
//! The parsing convention throughout this module: every `parse_*` method
//! leaves the parser positioned on the *last* token of the construct it
//! parsed; the caller advances past it.

use super::Parser;
use super::error::ParseError;
use crate::token::{Span, Token, TokenKind};

impl Parser {
    /// Returns a reference to the current token.
    ///
    /// Safe to call at any time; past the end it returns the last token,
    /// which is always `Eof`.
    pub(super) fn current(&self) -> &Token {
        // new() ensures tokens is non-empty, so the index is always valid.
        let idx = self.pos.min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the current token.
    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// Returns the span of the current token.
    pub(super) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Returns a reference to the peeked (next) token.
    ///
    /// Past the end this returns the last token, which is always `Eof`.
    pub(super) fn peek(&self) -> &Token {
        let idx = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[idx]
    }

    /// Returns the kind of the peeked token.
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    /// Returns `true` if the current token is `Eof`.
    pub(super) fn is_eof(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Advances to the next token.
    ///
    /// Does nothing if already at `Eof`.
    pub(super) fn advance(&mut self) {
        if !self.is_eof() {
            self.pos += 1;
        }
    }

    /// Expects the peeked token to be of the given kind and advances onto
    /// it.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the peeked token matched; it is now the current token
    /// * `Err(ParseError)` - If the peeked token did not match
    pub(super) fn expect_peek(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.peek_kind() == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::unexpected_token(expected, self.peek()))
        }
    }
}
