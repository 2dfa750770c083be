//! Statement nodes for the Monkey AST.

use std::fmt;

use crate::token::{Span, Token};

use super::expr::{Expr, Identifier};

/// The kind of a statement.
///
/// This enum represents the different statement forms without the
/// originating token. Use [`Stmt`] for the full AST node.
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// A binding: `let <name> = <value>;`.
    ///
    /// Each `let` introduces a new binding in the innermost environment
    /// frame; it never reassigns an outer binding.
    Let {
        /// The name being bound.
        name: Identifier,
        /// The bound expression.
        value: Expr,
    },

    /// A return statement: `return <value>;`.
    Return(Expr),

    /// A bare expression used as a statement.
    Expr(Expr),
}

/// A statement with its originating token.
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    /// The kind of statement.
    pub kind: StmtKind,
    /// The token that started this statement.
    pub token: Token,
}

impl Stmt {
    /// Creates a new statement with the given kind and token.
    pub fn new(kind: StmtKind, token: Token) -> Self {
        Stmt { kind, token }
    }

    /// Returns the literal of the originating token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    /// Returns the source location of this statement's first token.
    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StmtKind::Let { name, value } => write!(f, "let {} = {};", name, value),
            StmtKind::Return(value) => write!(f, "return {};", value),
            StmtKind::Expr(expr) => write!(f, "{};", expr),
        }
    }
}
