//! Tests for builtin functions called from source programs.

use super::*;

#[test]
fn test_len_of_string() {
    assert_integer(r#"len("hello")"#, 5);
    assert_integer(r#"len("")"#, 0);
    assert_integer(r#"len("hello world")"#, 11);
}

#[test]
fn test_len_of_concatenation() {
    assert_integer(r#"len("a" + "bc")"#, 3);
}

#[test]
fn test_len_wrong_type() {
    let err = eval_err("len(5)");
    assert_eq!(err.kind(), EvalErrorKind::BuiltinArgument);
    assert_eq!(err.message(), "len takes a string, got INTEGER");
}

#[test]
fn test_len_wrong_arity() {
    let err = eval_err(r#"len("a", "b")"#);
    assert_eq!(err.kind(), EvalErrorKind::BuiltinArgument);
    assert_eq!(err.message(), "len takes 1 argument, got 2");

    let err = eval_err("len()");
    assert_eq!(err.message(), "len takes 1 argument, got 0");
}

#[test]
fn test_puts_returns_null() {
    assert_eq!(eval_ok(r#"puts("x")"#), NULL);
    assert_eq!(eval_ok("puts()"), NULL);
    assert_eq!(eval_ok("puts(1, true, \"s\")"), NULL);
}

#[test]
fn test_input_wrong_prompt_type() {
    let err = eval_err("input(5)");
    assert_eq!(err.kind(), EvalErrorKind::BuiltinArgument);
    assert_eq!(err.message(), "input takes a string, got INTEGER");
}

#[test]
fn test_input_too_many_arguments() {
    let err = eval_err(r#"input("a", "b")"#);
    assert_eq!(err.kind(), EvalErrorKind::BuiltinArgument);
    assert_eq!(err.message(), "input takes at most 1 argument, got 2");
}

#[test]
fn test_builtin_is_first_class() {
    assert_integer("let f = len; f(\"abc\")", 3);
}
