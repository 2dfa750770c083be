//! Tree-walking evaluator for the Monkey language.
//!
//! This module walks the AST produced by the [`crate::parser`] and
//! produces a [`Value`], threading a shared [`Env`] through the walk for
//! lexical scoping.
//!
//! # Overview
//!
//! Evaluation is strictly single-threaded and synchronous. Statements
//! execute in source order; call arguments evaluate left-to-right before
//! the callee body runs; both operands of `==`/`!=` are always evaluated
//! (no short-circuiting).
//!
//! `return` is modeled in-band: a [`Value::Return`] wrapper propagates
//! through nested blocks without unwrapping, and is unwrapped at the two
//! boundaries that terminate it - the program top level and a function
//! call. The wrapper never escapes the evaluator.
//!
//! # Examples
//!
//! ```
//! use monk::evaluator::evaluate;
//! use monk::lexer::Lexer;
//! use monk::object::{Environment, Value};
//! use monk::parser::Parser;
//!
//! let mut lexer = Lexer::new("let x = 2; x * 21;");
//! let mut parser = Parser::new(lexer.tokenize());
//! let program = parser.parse().unwrap();
//!
//! let env = Environment::new();
//! let result = evaluate(&program, &env).unwrap();
//! assert_eq!(result, Value::Integer(42));
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Evaluation error types
//! - `expr` - Expression evaluation (operators, conditionals, calls)
//! - `builtins` - The built-in function registry
//! - `tests` - Unit tests (test-only)

mod builtins;
mod error;
mod expr;

#[cfg(test)]
mod tests;

pub use error::{EvalError, EvalErrorKind};

use crate::ast::{Block, Program, Stmt, StmtKind};
use crate::object::{Env, NULL, Value};

/// Evaluates a program in the given environment.
///
/// The result is the last statement's value, except that a `return`
/// anywhere at the top level short-circuits: its inner value is
/// unwrapped and returned immediately. An empty program evaluates to
/// `null`.
pub fn evaluate(program: &Program, env: &Env) -> Result<Value, EvalError> {
    let mut result = NULL;

    for stmt in &program.statements {
        match eval_statement(stmt, env)? {
            Value::Return(value) => return Ok(*value),
            value => result = value,
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
fn eval_statement(stmt: &Stmt, env: &Env) -> Result<Value, EvalError> {
    match &stmt.kind {
        StmtKind::Let { name, value } => {
            let value = expr::eval_expression(value, env)?;
            env.borrow_mut().set(name.value.clone(), value);
            Ok(NULL)
        }
        StmtKind::Return(value) => {
            let value = expr::eval_expression(value, env)?;
            Ok(Value::Return(Box::new(value)))
        }
        StmtKind::Expr(expr) => expr::eval_expression(expr, env),
    }
}

/// Evaluates a block of statements.
///
/// Unlike [`evaluate`], a `Return` wrapper is propagated *without*
/// unwrapping, so a `return` inside nested blocks travels all the way to
/// the enclosing function body (or program top level). An empty block
/// evaluates to `null`.
fn eval_block(block: &Block, env: &Env) -> Result<Value, EvalError> {
    let mut result = NULL;

    for stmt in &block.statements {
        result = eval_statement(stmt, env)?;

        if matches!(result, Value::Return(_)) {
            return Ok(result);
        }
    }

    Ok(result)
}
