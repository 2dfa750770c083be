//! Parser for the Monkey language.
//!
//! This module provides the [`Parser`] struct which transforms a token
//! stream into an Abstract Syntax Tree ([`Program`]).
//!
//! # Overview
//!
//! The parser is a Pratt (operator-precedence) parser: statements are
//! parsed by recursive descent, and expressions by dispatching the
//! current token to a prefix parse function and then repeatedly folding
//! infix operators while the peeked token binds tighter than the caller's
//! minimum precedence. One token of lookahead is sufficient.
//!
//! # Grammar
//!
//! ```text
//! program    → statement* EOF
//! statement  → let_stmt | return_stmt | expr_stmt
//! let_stmt   → "let" IDENT "=" expression ";"
//! return_stmt→ "return" expression ";"
//! expr_stmt  → expression ";"?
//! block      → "{" statement* "}"
//! fn_lit     → "fn" "(" (IDENT ("," IDENT)*)? ")" block
//! if_expr    → "if" "(" expression ")" block ("else" block)?
//! call       → (IDENT | fn_lit) "(" (expression ("," expression)*)? ")"
//! ```
//!
//! # Examples
//!
//! ```
//! use monk::lexer::Lexer;
//! use monk::parser::Parser;
//!
//! let mut lexer = Lexer::new("let x = 5;");
//! let mut parser = Parser::new(lexer.tokenize());
//! let program = parser.parse().unwrap();
//!
//! assert_eq!(program.statements.len(), 1);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Parse error types
//! - `helpers` - Token navigation and expectation helpers
//! - `stmt` - Statement and block parsing
//! - `expr` - Pratt expression parsing
//! - `tests` - Unit tests (test-only)
//!
//! # See Also
//!
//! * [`crate::lexer`] - Produces the token stream consumed by the parser
//! * [`crate::ast`] - Defines the AST types produced by the parser

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::{ParseError, ParseErrorKind};

use crate::ast::{Program, Stmt};
use crate::token::Token;

/// A Pratt parser for the Monkey language.
///
/// The parser maintains a position within the token stream; the current
/// token and one peeked token drive all parsing decisions.
///
/// # Usage
///
/// Create a parser with [`Parser::new`], then call [`Parser::parse`] to
/// produce an AST.
pub struct Parser {
    /// The token stream to parse.
    tokens: Vec<Token>,
    /// Current position in the token stream.
    pos: usize,
}

impl Parser {
    /// Creates a new parser from a token list.
    ///
    /// # Panics
    ///
    /// Panics if the token list is empty. The lexer always produces at
    /// least an `Eof` token.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "Token list must not be empty");
        Parser { tokens, pos: 0 }
    }

    /// Parses the entire token stream into a [`Program`].
    ///
    /// This is the main entry point for parsing. It repeatedly parses
    /// statements until the end of file is reached. Any parse error
    /// halts the parse immediately.
    pub fn parse(&mut self) -> Result<Program, ParseError> {
        let mut statements: Vec<Stmt> = Vec::new();

        while !self.is_eof() {
            let stmt = self.parse_statement()?;
            statements.push(stmt);
            self.advance();
        }

        Ok(Program { statements })
    }
}
