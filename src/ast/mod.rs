//! Abstract Syntax Tree definitions for the Monkey language.
//!
//! This module defines the data structures that represent parsed Monkey
//! programs. The AST is produced by the [`crate::parser`] and consumed by
//! the [`crate::evaluator`].
//!
//! # Structure
//!
//! The AST has two disjoint node families:
//! - [`Stmt`] - Statements, which produce no value of their own
//!   (`let`, `return`, expression statements)
//! - [`Expr`] - Expressions, which produce a value (literals,
//!   identifiers, prefix/infix operations, `if`, function literals, calls)
//!
//! A [`Program`] is the root node: an ordered sequence of statements.
//! Every node keeps the token that started it, so it can report the
//! originating literal (`token_literal`) and source location, and every
//! node implements [`Display`](std::fmt::Display) producing a canonical
//! source form that reparses to the same tree.
//!
//! # Module Structure
//!
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds
//! - [`program`] - Top-level program structure
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::evaluator`] - Walks the AST to produce values

mod expr;
mod program;
mod stmt;


pub use expr::{Block, Expr, ExprKind, Identifier};
pub use program::Program;
pub use stmt::{Stmt, StmtKind};

use std::fmt::Display;

/// Joins items with `", "` using their `Display` form.
///
/// Used for parameter and argument lists in canonical printing.
pub(crate) fn join_commas<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
