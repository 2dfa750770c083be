//! Tests for operator precedence via canonical printing.
//!
//! The parenthesized `Display` form makes the parsed structure explicit,
//! so comparing it against an expected string pins down precedence and
//! associativity at once.

use super::*;

#[test]
fn test_operator_precedence() {
    let cases = [
        ("-a * b", "((-a) * b);"),
        ("!-a", "(!(-a));"),
        ("a + b + c", "((a + b) + c);"),
        ("a + b - c", "((a + b) - c);"),
        ("a * b * c", "((a * b) * c);"),
        ("a * b / c", "((a * b) / c);"),
        ("a + b / c", "(a + (b / c));"),
        ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f);"),
        ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4));"),
        ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4));"),
        (
            "3 + 4 * 5 == 3 * 1 + 4 * 5",
            "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)));",
        ),
        ("true", "true;"),
        ("false", "false;"),
        ("3 > 5 == false", "((3 > 5) == false);"),
        ("3 < 5 == true", "((3 < 5) == true);"),
    ];

    for (input, expected) in cases {
        let program = parse_program(input);
        assert_eq!(program.to_string(), expected, "for input {:?}", input);
    }
}

#[test]
fn test_grouped_expressions() {
    let cases = [
        ("1 + (2 + 3) + 4;", "((1 + (2 + 3)) + 4);"),
        ("(5 + 5) * 2;", "((5 + 5) * 2);"),
        ("2 / (5 + 5);", "(2 / (5 + 5));"),
        ("-(5 + 5);", "(-(5 + 5));"),
        ("!(true == true);", "(!(true == true));"),
    ];

    for (input, expected) in cases {
        let program = parse_program(input);
        assert_eq!(program.to_string(), expected, "for input {:?}", input);
    }
}

#[test]
fn test_call_binds_tightest() {
    let program = parse_program("a + add(b * c) + d");
    assert_eq!(program.to_string(), "((a + add((b * c))) + d);");
}

#[test]
fn test_call_arguments_reset_precedence() {
    let program = parse_program("add(a + b + c * d, add(e))");
    assert_eq!(program.to_string(), "add(((a + b) + (c * d)), add(e));");
}

#[test]
fn test_display_reparses_to_same_tree() {
    let sources = [
        "let x = 5 * -3;",
        "if (x < y) { x } else { y };",
        "fn(a, b) { a + b; }(1, 2);",
        "return 1 + 2 * 3;",
    ];

    for source in sources {
        let first = parse_program(source);
        let second = parse_program(&first.to_string());
        assert_eq!(
            first.to_string(),
            second.to_string(),
            "round trip diverged for {:?}",
            source
        );
    }
}
