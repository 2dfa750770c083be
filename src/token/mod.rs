//! Token definitions for the Monk lexer.
//!
//! This module provides the fundamental token types used throughout the
//! interpreter. It defines [`Span`] for source location tracking,
//! [`TokenKind`] for token types, and [`Token`] for representing lexical
//! units with their text and position.
//!
//! # Overview
//!
//! The lexer produces [`Token`]s, each containing:
//! - A [`TokenKind`] describing what type of token it is
//! - The exact source text that produced it (the `literal`)
//! - A [`Span`] indicating where in the source code it appears
//!
//! # Module Structure
//!
//! - [`span`] - Source location tracking ([`Span`] struct)
//! - [`kind`] - Token type definitions ([`TokenKind`] enum)
//!
//! # See Also
//!
//! * [`crate::lexer`] - The lexer that produces these tokens
//! * [`crate::parser`] - The parser that consumes these tokens

mod kind;
mod span;

pub use kind::TokenKind;
pub use span::Span;

/// A token with its kind, literal text, and source location.
///
/// The `literal` is the exact source substring that produced the token,
/// except for synthesized tokens: `Eof` carries an empty literal, and
/// string tokens carry their content with the surrounding quotes
/// stripped.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of this token.
    pub kind: TokenKind,
    /// The source text of this token.
    pub literal: String,
    /// The source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new `Token` with the given kind, literal, and span.
    ///
    /// This is a simple constructor that performs no validation. The
    /// caller is responsible for ensuring the span corresponds to the
    /// token's position in the source.
    pub fn new(kind: TokenKind, literal: impl Into<String>, span: Span) -> Self {
        Token {
            kind,
            literal: literal.into(),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_new() {
        let span = Span::new(0, 3, 1, 1);
        let token = Token::new(TokenKind::Let, "let", span);
        assert_eq!(token.kind, TokenKind::Let);
        assert_eq!(token.literal, "let");
        assert_eq!(token.span.start, 0);
        assert_eq!(token.span.end, 3);
    }

    #[test]
    fn test_token_clone() {
        let span = Span::new(0, 1, 1, 1);
        let token1 = Token::new(TokenKind::Ident, "x", span);
        let token2 = token1.clone();
        assert_eq!(token1, token2);
    }
}
