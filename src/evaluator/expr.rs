//! Expression evaluation.
//!
//! Operator dispatch, conditionals, closure creation, and calls. All
//! errors carry the span of the token that anchors the failing
//! expression (the operator token for operator errors, the opening paren
//! for call errors).

use std::rc::Rc;

use crate::ast::{Block, Expr, ExprKind};
use crate::object::{Env, Environment, FALSE, Function, NULL, TRUE, Value, ValueType};
use crate::token::Span;

use super::builtins;
use super::error::EvalError;
use super::eval_block;

/// Evaluates an expression in the given environment.
pub(super) fn eval_expression(expr: &Expr, env: &Env) -> Result<Value, EvalError> {
    match &expr.kind {
        ExprKind::Identifier(name) => eval_identifier(name, env, expr.span()),
        ExprKind::IntegerLiteral(value) => Ok(Value::Integer(*value)),
        ExprKind::BooleanLiteral(value) => Ok(native_bool(*value)),
        ExprKind::StringLiteral(value) => Ok(Value::String(value.clone())),
        ExprKind::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            eval_prefix_expression(operator, right, expr.span())
        }
        ExprKind::Infix {
            left,
            operator,
            right,
        } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            eval_infix_expression(operator, left, right, expr.span())
        }
        ExprKind::If {
            condition,
            consequence,
            alternative,
        } => eval_if_expression(condition, consequence, alternative.as_ref(), env),
        ExprKind::FunctionLiteral { parameters, body } => {
            Ok(Value::Function(Rc::new(Function {
                parameters: parameters.clone(),
                body: body.clone(),
                env: env.clone(),
            })))
        }
        ExprKind::Call {
            function,
            arguments,
        } => eval_call_expression(function, arguments, env, expr.span()),
    }
}

/// Returns the canonical boolean value for a native bool.
fn native_bool(value: bool) -> Value {
    if value { TRUE } else { FALSE }
}

/// Resolves an identifier: environment chain first, then the builtin
/// table.
fn eval_identifier(name: &str, env: &Env, span: Span) -> Result<Value, EvalError> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    if let Some(builtin) = builtins::lookup(name) {
        return Ok(Value::Builtin(builtin));
    }

    Err(EvalError::unknown_identifier(name, span))
}

/// Evaluates a prefix operation.
///
/// `!` follows truthiness: `!false` and `!null` are `true`, everything
/// else negates to `false`. Unary `-` is only defined on integers and
/// wraps on overflow (`-i64::MIN` stays `i64::MIN`).
fn eval_prefix_expression(operator: &str, right: Value, span: Span) -> Result<Value, EvalError> {
    match (operator, right) {
        ("!", right) => Ok(native_bool(!right.is_truthy())),
        ("-", Value::Integer(value)) => Ok(Value::Integer(value.wrapping_neg())),
        (operator, right) => Err(EvalError::unknown_prefix_operator(
            operator,
            right.value_type(),
            span,
        )),
    }
}

/// Evaluates an infix operation.
///
/// Operands of different types are a type mismatch, even for `==`/`!=`.
/// Equal-typed integers get the full arithmetic and comparison set,
/// strings get `+` (concatenation) and equality, booleans get equality;
/// every other combination is an unknown operator.
fn eval_infix_expression(
    operator: &str,
    left: Value,
    right: Value,
    span: Span,
) -> Result<Value, EvalError> {
    if left.value_type() != right.value_type() {
        return Err(EvalError::type_mismatch(
            left.value_type(),
            operator,
            right.value_type(),
            span,
        ));
    }

    match (&left, &right) {
        (Value::Integer(l), Value::Integer(r)) => {
            eval_integer_infix_expression(operator, *l, *r, span)
        }
        (Value::Boolean(l), Value::Boolean(r)) => match operator {
            "==" => Ok(native_bool(l == r)),
            "!=" => Ok(native_bool(l != r)),
            _ => Err(EvalError::unknown_infix_operator(
                left.value_type(),
                operator,
                right.value_type(),
                span,
            )),
        },
        (Value::String(l), Value::String(r)) => match operator {
            "+" => Ok(Value::String(format!("{}{}", l, r))),
            "==" => Ok(native_bool(l == r)),
            "!=" => Ok(native_bool(l != r)),
            _ => Err(EvalError::unknown_infix_operator(
                left.value_type(),
                operator,
                right.value_type(),
                span,
            )),
        },
        _ => Err(EvalError::unknown_infix_operator(
            left.value_type(),
            operator,
            right.value_type(),
            span,
        )),
    }
}

/// Evaluates an integer infix operation.
///
/// Arithmetic wraps in two's complement. Division truncates toward zero
/// (host `/` semantics); dividing by zero is an evaluation error.
fn eval_integer_infix_expression(
    operator: &str,
    left: i64,
    right: i64,
    span: Span,
) -> Result<Value, EvalError> {
    match operator {
        "+" => Ok(Value::Integer(left.wrapping_add(right))),
        "-" => Ok(Value::Integer(left.wrapping_sub(right))),
        "*" => Ok(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                Err(EvalError::division_by_zero(span))
            } else {
                Ok(Value::Integer(left.wrapping_div(right)))
            }
        }
        "<" => Ok(native_bool(left < right)),
        ">" => Ok(native_bool(left > right)),
        "==" => Ok(native_bool(left == right)),
        "!=" => Ok(native_bool(left != right)),
        _ => Err(EvalError::unknown_infix_operator(
            ValueType::Integer,
            operator,
            ValueType::Integer,
            span,
        )),
    }
}

/// Evaluates an if expression.
///
/// The condition is evaluated first; a truthy value selects the
/// consequence, otherwise the alternative if present, otherwise `null`.
fn eval_if_expression(
    condition: &Expr,
    consequence: &Block,
    alternative: Option<&Block>,
    env: &Env,
) -> Result<Value, EvalError> {
    let condition = eval_expression(condition, env)?;

    if condition.is_truthy() {
        eval_block(consequence, env)
    } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
    } else {
        Ok(NULL)
    }
}

/// Evaluates a call expression.
///
/// The callee is evaluated first, then the arguments left-to-right.
/// Builtins are invoked directly. Functions get a fresh environment
/// whose outer is the captured one, with parameters bound positionally:
/// extra arguments are ignored, and unbound parameters surface as an
/// identifier-lookup error on first use. A `Return` from the body is
/// unwrapped here.
fn eval_call_expression(
    function: &Expr,
    arguments: &[Expr],
    env: &Env,
    span: Span,
) -> Result<Value, EvalError> {
    let callee = eval_expression(function, env)?;

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        args.push(eval_expression(argument, env)?);
    }

    match callee {
        Value::Builtin(builtin) => builtin
            .call(&args)
            .map_err(|e| EvalError::builtin(e.message, span)),
        Value::Function(function) => {
            let scope = Environment::enclosed(function.env.clone());
            for (param, arg) in function.parameters.iter().zip(args) {
                scope.borrow_mut().set(param.value.clone(), arg);
            }

            match eval_block(&function.body, &scope)? {
                Value::Return(value) => Ok(*value),
                value => Ok(value),
            }
        }
        other => Err(EvalError::not_callable(other.value_type(), span)),
    }
}
