//! The wrapper for built-in functions.

use super::value::Value;

/// The signature of a native built-in implementation.
///
/// Built-ins receive the already-evaluated argument list and either
/// produce a value or fail with a [`BuiltinError`].
pub type BuiltinFn = fn(&[Value]) -> Result<Value, BuiltinError>;

/// A built-in function value.
///
/// A plain function pointer plus the name used in error messages; the
/// registry of builtins lives in the evaluator.
#[derive(Debug, Clone, Copy)]
pub struct Builtin {
    /// The name the builtin is looked up under.
    pub name: &'static str,
    func: BuiltinFn,
}

impl Builtin {
    /// Creates a builtin from its name and implementation.
    pub fn new(name: &'static str, func: BuiltinFn) -> Self {
        Builtin { name, func }
    }

    /// Invokes the builtin with the given arguments.
    pub fn call(&self, args: &[Value]) -> Result<Value, BuiltinError> {
        (self.func)(args)
    }
}

impl PartialEq for Builtin {
    /// Builtins compare by name; the registry holds one entry per name.
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// An error raised by a built-in function.
///
/// Builtins have no source location of their own; the evaluator attaches
/// the call site's span when converting this into an evaluation error.
#[derive(Debug)]
pub struct BuiltinError {
    /// A human-readable description of the error.
    pub message: String,
}

impl BuiltinError {
    /// Creates a builtin error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        BuiltinError {
            message: message.into(),
        }
    }
}
