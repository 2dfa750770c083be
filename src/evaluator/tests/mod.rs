//! Unit tests for the evaluator module.

use super::*;
use crate::lexer::Lexer;
use crate::object::{Environment, FALSE, TRUE, ValueType};
use crate::parser::Parser;

/// Lexes, parses, and evaluates a program in a fresh environment.
pub(super) fn run(input: &str) -> Result<Value, EvalError> {
    let mut lexer = Lexer::new(input);
    let mut parser = Parser::new(lexer.tokenize());
    let program = parser
        .parse()
        .unwrap_or_else(|e| panic!("Parse failed for input {:?}: {}", input, e));

    let env = Environment::new();
    evaluate(&program, &env)
}

/// Evaluates a program, panicking with the error message on failure.
pub(super) fn eval_ok(input: &str) -> Value {
    run(input).unwrap_or_else(|e| panic!("Evaluation failed for input {:?}: {}", input, e))
}

/// Evaluates a program expected to fail, returning the error.
pub(super) fn eval_err(input: &str) -> EvalError {
    match run(input) {
        Ok(value) => panic!(
            "Expected evaluation to fail for input {:?}, but it produced {:?}",
            input, value
        ),
        Err(e) => e,
    }
}

/// Asserts that a program evaluates to the given integer.
pub(super) fn assert_integer(input: &str, expected: i64) {
    let result = eval_ok(input);
    assert_eq!(
        result,
        Value::Integer(expected),
        "for input {:?}",
        input
    );
}

/// Asserts that a program evaluates to the given boolean.
pub(super) fn assert_boolean(input: &str, expected: bool) {
    let result = eval_ok(input);
    assert_eq!(
        result,
        Value::Boolean(expected),
        "for input {:?}",
        input
    );
}

mod builtins;
mod conditionals;
