//! Top-level program structure for the Monkey AST.

use std::fmt;

use super::stmt::Stmt;

/// The root node of a parsed program: an ordered sequence of statements.
///
/// The parser owns nothing beyond this node; the evaluator borrows it.
/// AST nodes are effectively immutable once parsing completes.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The statements in this program, in source order.
    pub statements: Vec<Stmt>,
}

impl Program {
    /// Returns the literal of the first statement's token, or the empty
    /// string for an empty program.
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .statements
            .iter()
            .map(|stmt| stmt.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", rendered)
    }
}
