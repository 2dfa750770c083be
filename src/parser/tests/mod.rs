//! Unit tests for the parser module.

use super::*;
use crate::ast::{Expr, ExprKind, Program, StmtKind};
use crate::lexer::Lexer;

/// Parses a program, panicking with the error message on failure.
pub(super) fn parse_program(input: &str) -> Program {
    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer.tokenize());
    parser
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for input {:?}: {}", input, e))
}

/// Parses a program expected to fail, returning the error.
pub(super) fn parse_error(input: &str) -> ParseError {
    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer.tokenize());
    match parser.parse() {
        Ok(program) => panic!(
            "Expected parsing to fail for input {:?}, but it produced {} statement(s)",
            input,
            program.statements.len()
        ),
        Err(e) => e,
    }
}

/// Parses a program expected to consist of a single expression statement
/// and returns the expression.
pub(super) fn parse_single_expression(input: &str) -> Expr {
    let program = parse_program(input);
    assert_eq!(
        program.statements.len(),
        1,
        "expected a single statement for input {:?}",
        input
    );
    match &program.statements[0].kind {
        StmtKind::Expr(expr) => expr.clone(),
        other => panic!("expected expression statement, got {:?}", other),
    }
}

/// Asserts that an expression is an integer literal with the given value.
pub(super) fn assert_int_literal(expr: &Expr, value: i64) {
    assert!(
        matches!(expr.kind, ExprKind::IntegerLiteral(v) if v == value),
        "expected integer literal {}, got {:?}",
        value,
        expr.kind
    );
    assert_eq!(expr.token_literal(), value.to_string());
}

/// Asserts that an expression is an identifier with the given name.
pub(super) fn assert_identifier(expr: &Expr, name: &str) {
    assert!(
        matches!(&expr.kind, ExprKind::Identifier(n) if n == name),
        "expected identifier {:?}, got {:?}",
        name,
        expr.kind
    );
    assert_eq!(expr.token_literal(), name);
}

mod precedence;
