//! Tests for if expression evaluation and truthiness.

use super::*;

#[test]
fn test_if_expressions() {
    let cases = [
        ("if (true) { 10 }", Some(10)),
        ("if (false) { 10 }", None),
        ("if (1) { 10 }", Some(10)),
        ("if (1 < 2) { 10 }", Some(10)),
        ("if (1 > 2) { 10 }", None),
        ("if (1 > 2) { 10 } else { 20 }", Some(20)),
        ("if (1 < 2) { 10 } else { 20 }", Some(10)),
    ];

    for (input, expected) in cases {
        match expected {
            Some(value) => assert_integer(input, value),
            None => assert_eq!(eval_ok(input), NULL, "for input {:?}", input),
        }
    }
}

#[test]
fn test_zero_is_truthy() {
    assert_integer("if (0) { 1 } else { 2 }", 1);
}

#[test]
fn test_empty_string_is_truthy() {
    assert_integer(r#"if ("") { 1 } else { 2 }"#, 1);
}

#[test]
fn test_empty_consequence_is_null() {
    assert_eq!(eval_ok("if (true) {}"), NULL);
}

#[test]
fn test_condition_may_be_any_type() {
    assert_integer(r#"if ("nonempty") { 1 } else { 2 }"#, 1);
}
