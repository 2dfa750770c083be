//! The built-in function registry.
//!
//! Builtins are resolved after an identifier misses the environment
//! chain, so a `let` binding can shadow any of them.

use std::io::{self, BufRead, Write};

use crate::object::{Builtin, BuiltinError, NULL, Value};

/// Looks up a builtin by name.
pub(super) fn lookup(name: &str) -> Option<Builtin> {
    match name {
        "len" => Some(Builtin::new("len", builtin_len)),
        "puts" => Some(Builtin::new("puts", builtin_puts)),
        "input" => Some(Builtin::new("input", builtin_input)),
        _ => None,
    }
}

/// `len(s)` - the character count of a string.
fn builtin_len(args: &[Value]) -> Result<Value, BuiltinError> {
    match args {
        [Value::String(value)] => Ok(Value::Integer(value.chars().count() as i64)),
        [other] => Err(BuiltinError::new(format!(
            "len takes a string, got {}",
            other.value_type()
        ))),
        _ => Err(BuiltinError::new(format!(
            "len takes 1 argument, got {}",
            args.len()
        ))),
    }
}

/// `puts(...)` - prints each argument on its own line in canonical form
/// (strings raw, without quotes) and returns `null`.
fn builtin_puts(args: &[Value]) -> Result<Value, BuiltinError> {
    for arg in args {
        println!("{}", arg);
    }
    Ok(NULL)
}

/// `input()` / `input(prompt)` - writes the optional prompt without a
/// trailing newline, reads one line from standard input, and returns it
/// with the line terminator stripped.
fn builtin_input(args: &[Value]) -> Result<Value, BuiltinError> {
    let prompt = match args {
        [] => "",
        [Value::String(value)] => value.as_str(),
        [other] => {
            return Err(BuiltinError::new(format!(
                "input takes a string, got {}",
                other.value_type()
            )));
        }
        _ => {
            return Err(BuiltinError::new(format!(
                "input takes at most 1 argument, got {}",
                args.len()
            )));
        }
    };

    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| BuiltinError::new(format!("Failed to write prompt: {}", e)))?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| BuiltinError::new(format!("Failed to read input: {}", e)))?;

    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }

    Ok(Value::String(line))
}
