//! Expression nodes for the Monkey AST.

use std::fmt;

use crate::token::{Span, Token};

use super::join_commas;
use super::stmt::Stmt;

/// An identifier with its originating token.
///
/// Identifiers appear both as expressions and in binding positions
/// (`let` names, function parameters), so they get their own node type.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The `Ident` token this identifier came from.
    pub token: Token,
    /// The identifier's name.
    pub value: String,
}

impl Identifier {
    /// Creates an identifier node from its token.
    ///
    /// The name is taken from the token's literal.
    pub fn new(token: Token) -> Self {
        let value = token.literal.clone();
        Identifier { token, value }
    }

    /// Returns the literal of the originating token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    /// Returns the source location of this identifier.
    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A braced sequence of statements.
///
/// Blocks appear as `if` consequences/alternatives and function bodies.
/// The token is the opening `{`.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The `LBrace` token that opened this block.
    pub token: Token,
    /// The statements in this block, in source order.
    pub statements: Vec<Stmt>,
}

impl Block {
    /// Returns the literal of the originating token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    /// Returns the source location of the opening brace.
    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;
        for stmt in &self.statements {
            writeln!(f, "    {}", stmt)?;
        }
        write!(f, "}}")
    }
}

/// The kind of an expression.
///
/// This enum represents the different expression forms without the
/// originating token. Use [`Expr`] for the full AST node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// A variable reference by name.
    Identifier(String),

    /// An integer literal.
    ///
    /// The value was parsed from the token literal at AST-build time; a
    /// literal that does not fit in `i64` is a parse error.
    IntegerLiteral(i64),

    /// A `true` or `false` literal.
    BooleanLiteral(bool),

    /// A string literal.
    ///
    /// The contained `String` is the content with the quotes stripped.
    StringLiteral(String),

    /// A prefix operation: `!right` or `-right`.
    Prefix {
        /// The operator text (`!` or `-`).
        operator: String,
        /// The operand.
        right: Box<Expr>,
    },

    /// An infix operation: `left <op> right`.
    Infix {
        /// The left operand.
        left: Box<Expr>,
        /// The operator text (`+`, `-`, `*`, `/`, `<`, `>`, `==`, `!=`).
        operator: String,
        /// The right operand.
        right: Box<Expr>,
    },

    /// An `if` expression with optional `else` branch.
    If {
        /// The condition expression.
        condition: Box<Expr>,
        /// The block evaluated when the condition is truthy.
        consequence: Block,
        /// The block evaluated otherwise, if present.
        alternative: Option<Block>,
    },

    /// A function literal: `fn(params) { body }`.
    FunctionLiteral {
        /// The parameter names, in order.
        parameters: Vec<Identifier>,
        /// The function body.
        body: Block,
    },

    /// A call expression.
    ///
    /// The parser guarantees the callee is syntactically an
    /// [`ExprKind::Identifier`] or [`ExprKind::FunctionLiteral`]; no
    /// other expression is callable in the source grammar.
    Call {
        /// The callee expression.
        function: Box<Expr>,
        /// The argument expressions, in order.
        arguments: Vec<Expr>,
    },
}

/// An expression with its originating token.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The kind of expression.
    pub kind: ExprKind,
    /// The token that started this expression.
    pub token: Token,
}

impl Expr {
    /// Creates a new expression with the given kind and token.
    pub fn new(kind: ExprKind, token: Token) -> Self {
        Expr { kind, token }
    }

    /// Returns the literal of the originating token.
    pub fn token_literal(&self) -> &str {
        &self.token.literal
    }

    /// Returns the source location of this expression's first token.
    pub fn span(&self) -> Span {
        self.token.span
    }
}

impl fmt::Display for Expr {
    /// Writes the canonical source form.
    ///
    /// Prefix and infix expressions are fully parenthesized so that
    /// operator precedence is explicit and the output reparses to the
    /// same tree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ExprKind::Identifier(name) => write!(f, "{}", name),
            ExprKind::IntegerLiteral(_) | ExprKind::BooleanLiteral(_) => {
                write!(f, "{}", self.token.literal)
            }
            ExprKind::StringLiteral(value) => write!(f, "\"{}\"", value),
            ExprKind::Prefix { operator, right } => write!(f, "({}{})", operator, right),
            ExprKind::Infix {
                left,
                operator,
                right,
            } => write!(f, "({} {} {})", left, operator, right),
            ExprKind::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if ({}) {}", condition, consequence)?;
                if let Some(alternative) = alternative {
                    write!(f, " else {}", alternative)?;
                }
                Ok(())
            }
            ExprKind::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {}", join_commas(parameters), body)
            }
            ExprKind::Call {
                function,
                arguments,
            } => write!(f, "{}({})", function, join_commas(arguments)),
        }
    }
}
