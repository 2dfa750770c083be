//! The runtime value model.

use std::fmt;
use std::rc::Rc;

use crate::ast::{Block, Identifier, join_commas};

use super::builtin::Builtin;
use super::environment::Env;

/// The canonical `true` value.
pub const TRUE: Value = Value::Boolean(true);

/// The canonical `false` value.
pub const FALSE: Value = Value::Boolean(false);

/// The canonical `null` value.
pub const NULL: Value = Value::Null;

/// A value produced by evaluation.
///
/// Values form a closed tagged set; the evaluator dispatches by matching
/// the tag. The canonical [`TRUE`], [`FALSE`], and [`NULL`] constants
/// give the three nullary values a single spelling; enum tag comparison
/// makes identity checks on them as cheap as pointer equality would be.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),

    /// A boolean.
    Boolean(bool),

    /// The null value.
    Null,

    /// A string.
    String(String),

    /// A wrapper that carries a `return` through nested blocks.
    ///
    /// Never visible outside the evaluator: the program and call
    /// boundaries unwrap it before returning.
    Return(Box<Value>),

    /// A closure: a function literal paired with its defining
    /// environment.
    Function(Rc<Function>),

    /// A built-in function.
    Builtin(Builtin),
}

/// A closure value.
///
/// The parameter list and body are owned clones of the AST nodes the
/// function literal was built from, so a closure bound in one REPL line
/// survives the AST of that line being dropped. The environment is the
/// one present at the creation site, held by reference.
#[derive(Debug)]
pub struct Function {
    /// The parameter names, in order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body: Block,
    /// The environment captured at the definition site.
    pub env: Env,
}

/// The type tag of a value, used in error messages and type-mismatch
/// detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    Integer,
    Boolean,
    Null,
    String,
    ReturnValue,
    Function,
    Builtin,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Integer => "INTEGER",
            ValueType::Boolean => "BOOLEAN",
            ValueType::Null => "NULL",
            ValueType::String => "STRING",
            ValueType::ReturnValue => "RETURN_VALUE",
            ValueType::Function => "FUNCTION",
            ValueType::Builtin => "BUILTIN",
        };
        write!(f, "{}", name)
    }
}

impl Value {
    /// Returns this value's type tag.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Null => ValueType::Null,
            Value::String(_) => ValueType::String,
            Value::Return(_) => ValueType::ReturnValue,
            Value::Function(_) => ValueType::Function,
            Value::Builtin(_) => ValueType::Builtin,
        }
    }

    /// Returns `true` unless this value is `false` or `null`.
    ///
    /// This is the condition policy for `if`: everything else is truthy,
    /// including `0` and the empty string.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    /// Returns the REPL print form.
    ///
    /// Strings are surrounded by double quotes so the user can tell a
    /// string result from other values; every other type prints the same
    /// as its [`Display`](fmt::Display) form.
    pub fn inspect(&self) -> String {
        match self {
            Value::String(s) => format!("\"{}\"", s),
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Value {
    /// Writes the canonical print form, as used by `puts`.
    ///
    /// Integers print in decimal, booleans lowercase, null as `null`,
    /// strings without surrounding quotes, functions as
    /// `fn(params) { body }`, and builtins as `builtin function`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
            Value::Null => write!(f, "null"),
            Value::String(value) => write!(f, "{}", value),
            Value::Return(value) => write!(f, "{}", value),
            Value::Function(function) => write!(
                f,
                "fn({}) {}",
                join_commas(&function.parameters),
                function.body
            ),
            Value::Builtin(_) => write!(f, "builtin function"),
        }
    }
}

impl PartialEq for Value {
    /// Structural equality for scalars and strings; identity for
    /// functions (shared `Rc`) and name equality for builtins.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_integer() {
        assert_eq!(Value::Integer(5).to_string(), "5");
        assert_eq!(Value::Integer(-10).to_string(), "-10");
    }

    #[test]
    fn test_display_booleans_lowercase() {
        assert_eq!(TRUE.to_string(), "true");
        assert_eq!(FALSE.to_string(), "false");
    }

    #[test]
    fn test_display_null() {
        assert_eq!(NULL.to_string(), "null");
    }

    #[test]
    fn test_display_string_raw() {
        assert_eq!(Value::String("hi".to_string()).to_string(), "hi");
    }

    #[test]
    fn test_inspect_string_quoted() {
        assert_eq!(Value::String("hi".to_string()).inspect(), "\"hi\"");
    }

    #[test]
    fn test_inspect_matches_display_for_non_strings() {
        assert_eq!(Value::Integer(7).inspect(), "7");
        assert_eq!(NULL.inspect(), "null");
        assert_eq!(TRUE.inspect(), "true");
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(Value::Integer(1).value_type().to_string(), "INTEGER");
        assert_eq!(TRUE.value_type().to_string(), "BOOLEAN");
        assert_eq!(NULL.value_type().to_string(), "NULL");
        assert_eq!(
            Value::String(String::new()).value_type().to_string(),
            "STRING"
        );
        assert_eq!(
            Value::Return(Box::new(NULL)).value_type().to_string(),
            "RETURN_VALUE"
        );
    }

    #[test]
    fn test_truthiness() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::Integer(1).is_truthy());
        assert!(Value::String(String::new()).is_truthy());
        assert!(TRUE.is_truthy());
        assert!(!FALSE.is_truthy());
        assert!(!NULL.is_truthy());
    }

    #[test]
    fn test_scalar_equality() {
        assert_eq!(Value::Integer(5), Value::Integer(5));
        assert_ne!(Value::Integer(5), Value::Integer(6));
        assert_eq!(TRUE, Value::Boolean(true));
        assert_ne!(Value::Integer(1), TRUE);
        assert_eq!(NULL, Value::Null);
    }
}
