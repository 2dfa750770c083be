//! Evaluation error types.
//!
//! This module defines [`EvalError`], which represents errors raised
//! while walking the AST: unknown names, operator and type errors, bad
//! calls, and builtin argument errors.

use crate::object::ValueType;
use crate::token::Span;

/// The kind of evaluation error.
///
/// This enum allows error handling code to match on error types
/// structurally rather than relying on string matching, which is fragile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// An identifier is bound neither in the environment chain nor in
    /// the builtin table.
    UnknownIdentifier,
    /// An infix expression with operands of different types.
    UnknownOperator,
    /// An operator applied to a type (or type pair) it does not support.
    TypeMismatch,
    /// A call whose callee evaluated to something that is not a function
    /// or builtin.
    NotCallable,
    /// A builtin was invoked with a bad argument count or type.
    BuiltinArgument,
    /// Integer division by zero.
    DivisionByZero,
}

/// An error that occurred during evaluation.
///
/// Contains a human-readable message and, where the originating AST node
/// provides one, the source location. Any evaluation error aborts the
/// current program evaluation; the REPL reports it and resumes, the file
/// driver reports it and exits non-zero.
#[derive(Debug)]
pub struct EvalError {
    /// A human-readable description of the error.
    message: String,
    /// The source location of the originating token, if available.
    span: Option<Span>,
    /// The kind of error, for structured error handling.
    kind: EvalErrorKind,
}

impl EvalError {
    /// Creates an error for a name that resolved nowhere.
    pub(super) fn unknown_identifier(name: &str, span: Span) -> Self {
        EvalError {
            message: format!("Unknown identifier {}", name),
            span: Some(span),
            kind: EvalErrorKind::UnknownIdentifier,
        }
    }

    /// Creates an error for an infix expression over mismatched types.
    pub(super) fn type_mismatch(
        left: ValueType,
        operator: &str,
        right: ValueType,
        span: Span,
    ) -> Self {
        EvalError {
            message: format!("Type mismatch: {} {} {}", left, operator, right),
            span: Some(span),
            kind: EvalErrorKind::TypeMismatch,
        }
    }

    /// Creates an error for a prefix operator applied to an unsupported
    /// operand type.
    pub(super) fn unknown_prefix_operator(operator: &str, right: ValueType, span: Span) -> Self {
        EvalError {
            message: format!("Unknown operator: {}{}", operator, right),
            span: Some(span),
            kind: EvalErrorKind::UnknownOperator,
        }
    }

    /// Creates an error for an infix operator applied to an unsupported
    /// operand type pair.
    pub(super) fn unknown_infix_operator(
        left: ValueType,
        operator: &str,
        right: ValueType,
        span: Span,
    ) -> Self {
        EvalError {
            message: format!("Unknown operator: {} {} {}", left, operator, right),
            span: Some(span),
            kind: EvalErrorKind::UnknownOperator,
        }
    }

    /// Creates an error for calling a value that is not callable.
    pub(super) fn not_callable(callee: ValueType, span: Span) -> Self {
        EvalError {
            message: format!("Cannot call {}", callee),
            span: Some(span),
            kind: EvalErrorKind::NotCallable,
        }
    }

    /// Creates an error from a builtin failure, attaching the call
    /// site's location.
    pub(super) fn builtin(message: String, span: Span) -> Self {
        EvalError {
            message,
            span: Some(span),
            kind: EvalErrorKind::BuiltinArgument,
        }
    }

    /// Creates a division-by-zero error.
    pub(super) fn division_by_zero(span: Span) -> Self {
        EvalError {
            message: "Division by zero".to_string(),
            span: Some(span),
            kind: EvalErrorKind::DivisionByZero,
        }
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the source location of the error, if available.
    pub fn span(&self) -> Option<Span> {
        self.span
    }

    /// Returns the kind of error.
    pub fn kind(&self) -> EvalErrorKind {
        self.kind
    }

    /// Returns a short heading for diagnostic reports.
    pub fn short_message(&self) -> &'static str {
        match self.kind {
            EvalErrorKind::UnknownIdentifier => "Unknown identifier",
            EvalErrorKind::UnknownOperator => "Unknown operator",
            EvalErrorKind::TypeMismatch => "Type mismatch",
            EvalErrorKind::NotCallable => "Not callable",
            EvalErrorKind::BuiltinArgument => "Invalid builtin call",
            EvalErrorKind::DivisionByZero => "Division by zero",
        }
    }

    /// Returns an optional help message for diagnostic reports.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            EvalErrorKind::NotCallable => Some("only functions and builtins can be called"),
            EvalErrorKind::TypeMismatch => {
                Some("infix operands must have the same type")
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(span) = &self.span {
            write!(f, "{}:{}: {}", span.line, span.column, self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for EvalError {}
